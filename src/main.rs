use commit_composer::config::AppConfig;
use commit_composer::taxonomy::Taxonomy;
use commit_composer::{cli, ui};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("CCM_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = cli::parse();

    if cli.list_types {
        let icon_format = AppConfig::load().unwrap_or_default().icon_format;
        ui::print_types(&Taxonomy::builtin(), icon_format);
        return;
    }

    let outcome = cli::run(&cli);
    ui::report(&outcome);
    std::process::exit(outcome.exit_code());
}
