use clap::Parser;
use gym_desk::{Cli, Config, MemberStore, Shell, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. .env, then config (environment, overridden by arguments)
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let mut config = Config::from_env();
    cli.apply(&mut config);

    // 2. Directories and logging
    setup_environment(&config, cli.json_logs(&config))?;

    print_banner();
    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "Gym desk starting"
    );

    // 3. Roster from the member files
    let store = MemberStore::from_config(&config);
    let mut shell = Shell::new(store);
    if cli.no_load {
        println!("Starting with an empty roster.");
    } else {
        println!("{}", shell.load());
    }
    println!("Type `help` for the list of commands.");

    // 4. Interactive loop
    let stdin = std::io::stdin();
    shell.run(stdin.lock(), std::io::stdout())?;

    tracing::info!("Gym desk stopped");
    Ok(())
}
