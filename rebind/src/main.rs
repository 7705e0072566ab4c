use structopt::StructOpt;

use rebind::demo;
use rebind::runtime::Runtime;
use rebind::Rebind;

fn main() {
    let opts = Rebind::from_args();

    let scenarios: Vec<&str> = if opts.scenarios.is_empty() {
        demo::SCENARIOS.to_vec()
    } else {
        opts.scenarios.iter().map(String::as_str).collect()
    };

    for name in scenarios {
        println!("--- {name}");

        // Each scenario gets a fresh runtime so globals don't leak between
        // transcripts.
        let mut rt = Runtime::new();
        if let Err(err) = demo::run(&mut rt, name) {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
