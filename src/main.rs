use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use rigscope::{report, GltfLoader};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <model filename>", args[0]);
        return ExitCode::FAILURE;
    }

    let path = &args[1];
    let doc = match GltfLoader::load(path) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("Error parsing '{path}': {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = report::report_scene(&mut out, &doc) {
        eprintln!("Error dumping '{path}': {err}");
        return ExitCode::FAILURE;
    }
    let _ = out.flush();

    ExitCode::SUCCESS
}
