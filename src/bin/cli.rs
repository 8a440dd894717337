use afaire::context::{AppContext, SharedContext, StandardContext};
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::rc::Rc;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        afaire::cli::print_help("afaire");
        return Ok(());
    }

    // Optional --root <path> to relocate config and data.
    let mut root: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                if i + 1 >= args.len() {
                    anyhow::bail!("--root requires a path argument");
                }
                root = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            other => {
                anyhow::bail!("unknown argument '{}'; try 'afaire --help'", other);
            }
        }
    }

    let ctx: SharedContext = Rc::new(StandardContext::new(root));
    init_logging(ctx.as_ref());

    afaire::repl::run(ctx)
}

/// Logs go to a file in the data dir; stdout belongs to the session.
/// Logging failures are tolerated silently: the tracker works without it.
fn init_logging(ctx: &dyn AppContext) {
    if let Ok(path) = ctx.get_log_file_path()
        && let Ok(file) = std::fs::File::create(&path)
    {
        let _ = simplelog::WriteLogger::init(
            log::LevelFilter::Info,
            simplelog::Config::default(),
            file,
        );
    }
}
