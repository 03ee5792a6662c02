use chrono::{Months, NaiveDate, Utc};
use habit_tracker::{
    AppResult, Habit, HabitApi, HabitsViewModel, HttpHabitApi, resolve_base_url, ui,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let base_url = resolve_base_url();
    info!("habit API at {base_url}");
    let vm = HabitsViewModel::new(HttpHabitApi::new(base_url));

    if let Err(err) = vm.load_habits().await {
        error!("initial load failed: {err}");
    }

    render(&vm).await;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "list" => report(vm.load_habits().await),
            "add" => {
                vm.set_name_input(rest).await;
                report(vm.submit_name_input().await);
            }
            "select" => match habit_at(&vm, rest).await {
                Some(habit) => report(vm.select_habit(&habit, None).await),
                None => println!("no habit number {rest}"),
            },
            "toggle" => match habit_at(&vm, rest).await {
                Some(habit) => report(vm.toggle_completion(&habit).await),
                None => println!("no habit number {rest}"),
            },
            "delete" => match habit_at(&vm, rest).await {
                Some(habit) => report(vm.delete_habit(&habit.id).await),
                None => println!("no habit number {rest}"),
            },
            "prev" | "next" => {
                let current = vm.snapshot().await.viewed_month;
                let target = if command == "prev" {
                    current - Months::new(1)
                } else {
                    current + Months::new(1)
                };
                report(vm.navigate_month(target).await);
            }
            "month" => match parse_month(rest) {
                Some(target) => report(vm.navigate_month(target).await),
                None => println!("usage: month YYYY-MM"),
            },
            _ => print_help(),
        }

        render(&vm).await;
    }

    Ok(())
}

async fn render<A: HabitApi>(vm: &HabitsViewModel<A>) {
    let state = vm.snapshot().await;
    println!("{}", ui::render_screen(&state, Utc::now().date_naive()));
}

async fn habit_at<A: HabitApi>(vm: &HabitsViewModel<A>, arg: &str) -> Option<Habit> {
    let index: usize = arg.trim().parse().ok()?;
    let state = vm.snapshot().await;
    state.habits.get(index.checked_sub(1)?).cloned()
}

fn parse_month(arg: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", arg.trim()), "%Y-%m-%d").ok()
}

fn report(result: AppResult<()>) {
    if let Err(err) = result {
        error!("{err}");
    }
}

fn print_help() {
    println!(
        "commands: list | add <name> | select <n> | toggle <n> | delete <n> | \
         prev | next | month YYYY-MM | quit"
    );
}
