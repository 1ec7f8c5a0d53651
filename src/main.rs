use clap::Parser;
use miette::Result;
use sert::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Submit(args) => sert::cli::commands::submit::run(args, &global),
        Commands::List(args) => sert::cli::commands::list::run(args, &global),
        Commands::Dashboard(args) => sert::cli::commands::dashboard::run(args, &global),
        Commands::Export(args) => sert::cli::commands::export::run(args, &global),
        Commands::Reset(args) => sert::cli::commands::reset::run(args, &global),
        Commands::Completions(args) => sert::cli::commands::completions::run(args),
    }
}
