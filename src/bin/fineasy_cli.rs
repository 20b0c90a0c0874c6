use std::{env, process};

use fineasy::{
    cli::{run_args, run_cli},
    init,
};

fn main() {
    init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = if args.is_empty() {
        run_cli()
    } else {
        run_args(&args)
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
