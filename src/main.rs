//! `huestep` command line entry point.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use huestep::report::{format_display_date, header_gradient};
use huestep::store::{JsonFileStore, UserStore};
use huestep::{
    AppConfig, CollectedColor, RecommendationEngine, ShareSession, TodayColor, UserId,
    WalkSession, WeeklyReport,
};
use huestep_canvas::{render_marble, ImageSource};
use huestep_color::{is_similar_color, Color};

const USAGE: &str = "\
Usage: huestep <command> [args]

Commands:
  today [YYYY-MM-DD] [HOUR]       Show the recommended color
  check <TARGET> <CANDIDATE>      Test whether a color can be collected
  card <IMAGE> <HEX> [--name N] [--date YYYY-MM-DD] [--size PX] [--out FILE]
                                  Export a palette card PNG
  marble <OUT> <HEX>...           Render a day marble PNG
  report <USER>                   Weekly report from stored data";

fn main() -> Result<()> {
    let config = AppConfig::load_from_default_path().unwrap_or_default();

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };

    match command.as_str() {
        "today" => today(rest),
        "check" => check(rest),
        "card" => card(&config, rest),
        "marble" => marble(rest),
        "report" => report(&config, rest),
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{value}', expected YYYY-MM-DD"))
}

fn parse_color(value: &str) -> Result<Color> {
    value
        .parse()
        .with_context(|| format!("invalid color '{value}', expected #RRGGBB"))
}

fn today(args: &[String]) -> Result<()> {
    let now = Local::now().naive_local();
    let date = match args.first() {
        Some(value) => parse_date(value)?,
        None => now.date(),
    };
    let hour = match args.get(1) {
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|h| *h < 24)
            .with_context(|| format!("invalid hour '{value}'"))?,
        None => now.hour(),
    };
    let time = NaiveTime::from_hms_opt(hour, 0, 0).context("invalid hour")?;

    let engine = RecommendationEngine::default();
    let rec = engine.recommend(NaiveDateTime::new(date, time));
    println!("{}", format_display_date(date));
    println!("{} {} ({})", rec.color.color, rec.color.name, rec.color.desc);
    println!(
        "season: {}, weather: {}, time: {}, source: {:?}",
        rec.season, rec.weather, rec.time_of_day, rec.source
    );
    Ok(())
}

fn check(args: &[String]) -> Result<()> {
    let [target, candidate] = args else {
        bail!("usage: huestep check <TARGET> <CANDIDATE>");
    };
    if is_similar_color(target, candidate) {
        println!("{candidate} matches {target}");
    } else {
        println!("{candidate} is not close enough to {target}");
    }
    Ok(())
}

fn card(config: &AppConfig, args: &[String]) -> Result<()> {
    let (Some(image), Some(hex)) = (args.first(), args.get(1)) else {
        bail!("usage: huestep card <IMAGE> <HEX> [--name N] [--date D] [--size PX] [--out FILE]");
    };
    let color = parse_color(hex)?;

    let mut name = config.render.default_color_name.clone();
    let mut date = Local::now().date_naive();
    let mut size = config.render.export_size;
    let mut out: Option<PathBuf> = None;

    let mut flags = args[2..].iter();
    while let Some(flag) = flags.next() {
        let value = flags
            .next()
            .with_context(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--name" => name = value.clone(),
            "--date" => date = parse_date(value)?,
            "--size" => {
                size = value
                    .parse()
                    .with_context(|| format!("invalid size '{value}'"))?
            }
            "--out" => out = Some(PathBuf::from(value)),
            other => bail!("unknown option '{other}'"),
        }
    }

    let collected = vec![CollectedColor::new(color, ImageSource::from_path(image))];
    let mut share = ShareSession::new(collected, date, &config.render)
        .context("nothing to share")?
        .with_color_name(name);
    let out = out.unwrap_or_else(|| PathBuf::from(share.export_filename()));

    share
        .save_png(size, &out)
        .with_context(|| format!("failed to export {}", out.display()))?;
    println!("{}", out.display());
    Ok(())
}

fn marble(args: &[String]) -> Result<()> {
    let Some((out, hexes)) = args.split_first() else {
        bail!("usage: huestep marble <OUT> <HEX>...");
    };
    let colors = hexes
        .iter()
        .map(|h| parse_color(h))
        .collect::<Result<Vec<_>>>()?;

    let img = render_marble(&colors, 256);
    img.save(out)
        .with_context(|| format!("failed to write {out}"))?;
    println!("{out}");
    Ok(())
}

fn report(config: &AppConfig, args: &[String]) -> Result<()> {
    let [user] = args else {
        bail!("usage: huestep report <USER>");
    };
    let store = JsonFileStore::new(config.data_dir());
    let user = UserId::new(user.as_str(), "");
    let data = store
        .load(&user)?
        .with_context(|| format!("no data stored for {user}"))?;

    let report = WeeklyReport::from_marbles(&data.marbles);
    let today = data.today_color.clone().unwrap_or_else(|| {
        TodayColor::from(&RecommendationEngine::default().recommend_now().color)
    });
    let (from, to) = header_gradient(today.color);
    println!("today: {} {} ({from} -> {to})", today.color, today.name);
    if let Some(steps) = data.current_steps {
        let mut walk = WalkSession::with_settings(today, &config.steps);
        walk.set_steps(steps);
        println!("walked: {steps} steps, {:.1} km", walk.distance_km());
    }
    for day in &report.days {
        println!(
            "{}  {}  {:>2} colors  {:>6} steps",
            day.date, day.main_color, day.color_count, day.steps
        );
    }
    println!(
        "total: {} steps, {:.1} km, {} colors, {} steps/day",
        report.total_steps, report.total_distance, report.total_colors, report.average_steps
    );
    Ok(())
}
