use clap::Parser;
use contact_form::cli::commands::{build_tracer, cmd_check, cmd_mount, cmd_render};
use contact_form::cli::config::{
    Cli, Commands, load_config, log_filter, resolve_container, resolve_form_path,
    resolve_trace_path,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries markup and reports only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());
    let tracer = build_tracer(resolve_trace_path(cli.trace.as_deref(), &config));

    match cli.command {
        Commands::Render { form, output } => {
            let form_path = resolve_form_path(form.as_deref(), &config);
            cmd_render(form_path, output.as_deref(), &tracer)?;
        }
        Commands::Mount {
            page,
            container,
            form,
            output,
        } => {
            let form_path = resolve_form_path(form.as_deref(), &config);
            let container = resolve_container(container.as_deref(), &config);
            cmd_mount(&page, container, form_path, output.as_deref(), &tracer)?;
        }
        Commands::Check { form } => {
            let form_path = resolve_form_path(form.as_deref(), &config);
            if !cmd_check(form_path)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
