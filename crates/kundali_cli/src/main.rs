use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use kundali_base::{
    AyanamshaSystem, Graha, Varga, arudha_house, ayanamsha_deg, current_dasha, kp_lords,
    nakshatra_from_longitude, position_from_longitude, rank_karakas, vimshottari_hierarchy,
};
use kundali_config::KundaliConfig;
use kundali_engine::{
    Chart, Engine, PositionTable, TableProvider, all_vargas, generate_chart, kp_data,
};
use kundali_rs::AiPayload;
use kundali_time::{BirthDetails, Instant, UtcTime, parse_date, parse_time, parse_utc_offset};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic and KP chart calculator")]
struct Cli {
    /// Configuration file (default: kundali.toml, config/kundali.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct BirthArgs {
    /// Local civil date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local civil time (HH:MM[:SS])
    #[arg(long)]
    time: String,
    /// UTC offset (+HH:MM)
    #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
    offset: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Decimal places
        #[arg(long, default_value = "2")]
        precision: u32,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Divisional sign of a sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Scheme: D9, 9 or a name such as navamsa
        #[arg(long, default_value = "D9")]
        division: String,
    },
    /// KP star lord and sub lord of a sidereal longitude
    Sublord {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Arudha of a house given the house its lord occupies
    Arudha {
        /// House number (1-12)
        house: u8,
        /// House occupied by the lord (1-12)
        lord_house: u8,
    },
    /// Rank chara karakas from degrees in sign (e.g. jupiter=28.14)
    Karaka {
        /// graha=degree pairs
        #[arg(required = true)]
        degrees: Vec<String>,
    },
    /// Ayanamsa of a system at a Julian Day
    Ayanamsa {
        /// System name (lahiri, kp, raman, fagan-bradley, ...)
        #[arg(long, default_value = "lahiri")]
        system: String,
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Normalize a civil birth event to a Julian Day
    Instant {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Vimshottari dasha from the Moon's sidereal longitude
    Dasha {
        /// Moon's sidereal longitude in degrees
        #[arg(long)]
        moon: f64,
        /// Birth Julian Day (UT)
        #[arg(long)]
        jd: f64,
        /// Julian Day for the current-period drill-down
        #[arg(long)]
        target: Option<f64>,
        /// Levels to list (1-5); defaults to the configured level
        #[arg(long)]
        depth: Option<u8>,
    },
    /// Natal chart from tabulated tropical positions
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// TOML file of [[row]] positions
        #[arg(long)]
        positions: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Include KP cusps, sub-lords and current dasha
        #[arg(long)]
        kp: bool,
        /// Include every divisional chart
        #[arg(long)]
        vargas: bool,
        /// Print the compact prompt payload
        #[arg(long)]
        ai: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    init_logging(&config.logging.filter, cli.verbose);

    match cli.command {
        Commands::Rashi { lon, precision } => {
            let pos = position_from_longitude(lon, precision).unwrap_or_else(|e| fail(e));
            let dms = pos.dms();
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.prec$} deg in rashi)",
                pos.sign.name(),
                pos.sign.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                pos.degree_in_sign,
                prec = precision as usize
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon).unwrap_or_else(|e| fail(e));
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada), lord {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada,
                info.nakshatra.lord().english_name()
            );
        }

        Commands::Varga { lon, division } => {
            let varga = Varga::from_name(&division)
                .unwrap_or_else(|| fail(format!("unknown division: {division}")));
            let pos = position_from_longitude(lon, 4).unwrap_or_else(|e| fail(e));
            let out = varga.apply(pos);
            println!(
                "D{} {}: {} {:.4} -> {} ({}) {:.4}",
                varga.divisor(),
                varga.name(),
                pos.sign.western_name(),
                pos.degree_in_sign,
                out.sign.name(),
                out.sign.western_name(),
                out.degree_in_sign
            );
        }

        Commands::Sublord { lon } => {
            let lords = kp_lords(lon).unwrap_or_else(|e| fail(e));
            println!(
                "{}: star lord {}, sub lord {}",
                lords.nakshatra.name(),
                lords.star_lord.english_name(),
                lords.sub_lord.english_name()
            );
        }

        Commands::Arudha { house, lord_house } => {
            if !(1..=12).contains(&house) || !(1..=12).contains(&lord_house) {
                fail("houses must be between 1 and 12");
            }
            let o = arudha_house(house, lord_house);
            println!(
                "Arudha of house {house}: house {} (distance {}, {:?})",
                o.house, o.distance, o.rule
            );
        }

        Commands::Karaka { degrees } => {
            let candidates: Vec<(Graha, f64)> = degrees
                .iter()
                .map(|pair| parse_karaka_pair(pair).unwrap_or_else(|e| fail(e)))
                .collect();
            let assignment = rank_karakas(&candidates).unwrap_or_else(|e| fail(e));
            for (graha, role) in assignment.ranking() {
                println!("{:<4} {:<14} {}", role.abbreviation(), role.name(), graha.english_name());
            }
        }

        Commands::Ayanamsa { system, jd } => {
            let system = AyanamshaSystem::from_name(&system).unwrap_or_else(|e| fail(e));
            println!("{}: {:.6} deg", system.name(), ayanamsha_deg(system, jd));
        }

        Commands::Instant { birth } => {
            let instant = to_instant(&birth);
            println!("JD (UT): {:.6}", instant.jd_ut);
            println!("UTC:     {}", utc_label(instant.jd_ut));
        }

        Commands::Dasha {
            moon,
            jd,
            target,
            depth,
        } => {
            let depth = depth.unwrap_or(config.dasha.max_level);
            let h = vimshottari_hierarchy(jd, moon, depth, config.dasha.horizon_years)
                .unwrap_or_else(|e| fail(e));
            for (i, maha) in h.levels[0].iter().enumerate() {
                println!(
                    "{:<8} {} .. {}",
                    maha.lord.english_name(),
                    date_label(maha.start_jd),
                    date_label(maha.end_jd)
                );
                if let Some(antars) = h.levels.get(1) {
                    for a in antars.iter().filter(|a| a.parent_idx as usize == i) {
                        println!(
                            "  {:<8} {} .. {}",
                            a.lord.english_name(),
                            date_label(a.start_jd),
                            date_label(a.end_jd)
                        );
                    }
                }
            }
            if let Some(t) = target {
                let current = current_dasha(moon, jd, t).unwrap_or_else(|e| fail(e));
                println!("\nRunning at {}:", date_label(t));
                for b in &current.levels {
                    println!(
                        "  {:<16} {:<8} {:.3} of {:.3} years left",
                        b.level.name(),
                        b.lord.english_name(),
                        b.balance_years,
                        b.period_years
                    );
                }
            }
        }

        Commands::Chart {
            birth,
            positions,
            json,
            kp,
            vargas,
            ai,
        } => {
            let instant = to_instant(&birth);
            let engine = load_engine(&config, &positions);
            let chart = generate_chart(&engine, instant).unwrap_or_else(|e| fail(e));
            let kp_out = (kp || ai)
                .then(|| kp_data(&engine, instant, None).unwrap_or_else(|e| fail(e)));
            let varga_out = vargas.then(|| all_vargas(&chart).unwrap_or_else(|e| fail(e)));

            if ai {
                let payload = AiPayload::new(&chart, kp_out.as_ref());
                println!("{}", payload.to_json().unwrap_or_else(|e| fail(e)));
            } else if json {
                let doc = serde_json::json!({
                    "chart": chart,
                    "kp": kp_out,
                    "vargas": varga_out,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&doc).unwrap_or_else(|e| fail(e))
                );
            } else {
                print_chart(&chart);
                if let Some(k) = &kp_out {
                    print_kp(k);
                }
                if let Some(vs) = &varga_out {
                    for v in vs {
                        let line: Vec<String> = v
                            .placements
                            .iter()
                            .map(|p| format!("{} {}", p.point.code(), p.position.sign.code()))
                            .collect();
                        println!("{:<28} {}", v.name, line.join("  "));
                    }
                }
            }
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn load_config(path: Option<&Path>) -> KundaliConfig {
    let loaded = match path {
        Some(p) => KundaliConfig::from_file(p),
        None => KundaliConfig::from_default_location(),
    };
    loaded.unwrap_or_else(|e| fail(format!("Failed to load config: {e}")))
}

fn init_logging(default_filter: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_engine(config: &KundaliConfig, positions: &Path) -> Engine {
    let text = std::fs::read_to_string(positions).unwrap_or_else(|e| {
        fail(format!("Failed to read {}: {e}", positions.display()))
    });
    let table: PositionTable =
        toml::from_str(&text).unwrap_or_else(|e| fail(format!("Invalid positions file: {e}")));
    debug!(rows = table.rows.len(), "position table loaded");
    let engine_config = config.to_engine_config().unwrap_or_else(|e| fail(e));
    let engine =
        Engine::new(TableProvider::new(table), engine_config).unwrap_or_else(|e| fail(e));
    info!(path = %positions.display(), "engine ready");
    engine
}

fn to_instant(args: &BirthArgs) -> Instant {
    let (year, month, day) = parse_date(&args.date).unwrap_or_else(|e| fail(e));
    let (hour, minute, second) = parse_time(&args.time).unwrap_or_else(|e| fail(e));
    let utc_offset_minutes = parse_utc_offset(&args.offset).unwrap_or_else(|e| fail(e));
    BirthDetails {
        year,
        month,
        day,
        hour,
        minute,
        second,
        utc_offset_minutes,
        latitude_deg: args.lat,
        longitude_deg: args.lon,
    }
    .to_instant()
    .unwrap_or_else(|e| fail(e))
}

fn parse_karaka_pair(pair: &str) -> Result<(Graha, f64), String> {
    let (name, deg) = pair
        .split_once('=')
        .ok_or_else(|| format!("expected graha=degree, got {pair}"))?;
    let graha = Graha::from_name(name).ok_or_else(|| format!("unknown graha: {name}"))?;
    let deg: f64 = deg
        .trim()
        .parse()
        .map_err(|_| format!("invalid degree: {deg}"))?;
    Ok((graha, deg))
}

fn utc_label(jd: f64) -> String {
    UtcTime::from_jd(jd).map_or_else(|_| format!("JD {jd:.4}"), |t| t.to_string())
}

fn date_label(jd: f64) -> String {
    UtcTime::from_jd(jd).map_or_else(
        |_| format!("JD {jd:.4}"),
        |t| format!("{:04}-{:02}-{:02}", t.year, t.month, t.day),
    )
}

fn print_chart(chart: &Chart) {
    println!(
        "{} | {} | ayanamsa {:.2} | {}",
        chart.metadata.zodiac,
        chart.metadata.house_system,
        chart.metadata.ayanamsa_deg,
        utc_label(chart.instant.jd_ut)
    );
    println!(
        "{:<10} {:<12} {:>8} {:>5}  {:<10} {:<16} {:<14} {:<22} {}",
        "Body", "Sign", "Degree", "House", "Rules", "Relationship", "Karaka", "Nakshatra", "Pada"
    );
    for r in chart.records() {
        println!(
            "{:<10} {:<12} {:>8.prec$} {:>5}  {:<10} {:<16} {:<14} {:<22} {}",
            r.name(),
            r.sign_name(),
            r.position.degree_in_sign,
            r.house,
            r.rules_houses_label(),
            r.relationship.name(),
            r.karaka_label(),
            r.nakshatra.nakshatra.name(),
            r.nakshatra.pada,
            prec = chart.metadata.precision as usize
        );
    }
    println!("\nArudha padas:");
    for pada in chart.arudha_padas() {
        println!("  {:<14} house {:>2}  {}", pada.pada.name(), pada.house, pada.sign.western_name());
    }
}

fn print_kp(kp: &kundali_engine::KpData) {
    println!(
        "\nKP ({}, {:.4} deg, {} cusps)",
        kp.ayanamsa_name, kp.ayanamsa_deg, kp.house_system
    );
    for c in &kp.cusps {
        println!(
            "  Cusp {:>2}  {:<12} {:>8.4}  star {:<8} sub {}",
            c.house,
            c.sign.western_name(),
            c.degree_in_sign,
            c.star_lord.english_name(),
            c.sub_lord.english_name()
        );
    }
    for p in &kp.planets {
        let sigs: Vec<String> = p.significators.iter().map(|h| h.to_string()).collect();
        println!(
            "  {:<10} {:>9.4}  star {:<8} sub {:<8} signifies {}",
            p.point.english_name(),
            p.longitude,
            p.star_lord.english_name(),
            p.sub_lord.english_name(),
            sigs.join(",")
        );
    }
    println!(
        "  Birth dasha: {} with {:.3} years remaining",
        kp.birth_balance.lord.english_name(),
        kp.birth_balance.balance_years
    );
    for b in &kp.current.levels {
        println!(
            "  {:<16} {:<8} {:.3} years left",
            b.level.name(),
            b.lord.english_name(),
            b.balance_years
        );
    }
}
