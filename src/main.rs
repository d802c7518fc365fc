use numu::{
    cli::{get_log_level_from_verbose, parse_cli, run, version_message, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let lvl = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    match cli.command {
        Commands::Add(args) => {
            if let Err(err) = run(args) {
                default_error_handler(err);
            }
        }
        Commands::Version => println!("{}", version_message()),
    }
}
