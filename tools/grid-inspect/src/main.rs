use std::{env, str::FromStr};
use whensday_rs::{
    schedules_for_day, today_utc, CalendarSystem, DayInstant, DisplayMonth, GridCell, MonthGrid,
    Schedule, SchedulePattern, WeekStart,
};

macro_rules! format_line(
    ($a:expr, $b:expr, $c: expr, $d: expr) => {
        println!("{:<12} {:<22} {:<22} {}", $a, $b, $c, $d)
    };
    ($a:expr, $b:expr) => {
        println!("{:<12} {}", $a, $b)
    };
);

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// Usage: grid-inspect <gregorian|whensday> <year> <month index> [<start date> <on> <off>] [--monday]
fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let week_start = if args.iter().any(|arg| arg == "--monday") {
        WeekStart::Monday
    } else {
        WeekStart::Sunday
    };
    let mut args = args.into_iter().filter(|arg| arg != "--monday");

    let system = CalendarSystem::from_str(&args.next().expect("Needs a calendar system")).unwrap();
    let year: i32 = args
        .next()
        .expect("Needs a year")
        .parse()
        .expect("Year must be an integer");
    let month_index: i32 = args
        .next()
        .expect("Needs a month index")
        .parse()
        .expect("Month index must be an integer");

    let schedules: Vec<Schedule> = match (args.next(), args.next(), args.next()) {
        (Some(start), Some(on), Some(off)) => {
            let start = DayInstant::from_str(&start).unwrap();
            let pattern = SchedulePattern::try_new(
                on.parse().expect("on must be an integer"),
                off.parse().expect("off must be an integer"),
            )
            .unwrap();
            vec![Schedule::new("inspect", start, pattern)]
        }
        _ => Vec::new(),
    };

    let month = DisplayMonth::try_new(system, year, month_index).unwrap();
    let grid = MonthGrid::new(month, week_start, today_utc().ok());

    format_line!("Month", format!("{} {}", month.name(), month.year()));
    format_line!("Days", month.days_in_month());
    format_line!("Padding", grid.leading_padding());
    println!();

    let labels: Vec<&str> = (0..7)
        .map(|column| WEEKDAYS[(column + usize::from(week_start.weekday())) % 7])
        .collect();
    println!("{}", labels.join(" "));
    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                GridCell::Padding => "  .".to_string(),
                GridCell::Day { date, is_today, .. } => {
                    format!("{}{:>2}", if *is_today { '*' } else { ' ' }, date.day())
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }
    println!();

    format_line!("Day", month.name(), system.toggle().identifier(), "State");
    for cell in grid.cells() {
        let GridCell::Day { date, instant, .. } = cell else {
            continue;
        };
        let other = date.convert_to(system.toggle());
        let state = schedules_for_day(&schedules, *instant)
            .first()
            .map_or("off", |reported| reported.state.as_str());
        format_line!(
            instant.to_string(),
            date.to_string(),
            other.to_string(),
            state
        );
    }
}
