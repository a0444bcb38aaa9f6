use clap::Parser;
use todochain::cli::commands::Cli;
use todochain::io::config_io::load_config;
use todochain::io::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(title) = cli.category {
        config.ui.default_category = title;
    }

    // Held until exit so buffered log lines are flushed
    let _guard = init_logging(cli.log_level.as_deref(), &config.log);

    if let Err(e) = todochain::tui::run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
