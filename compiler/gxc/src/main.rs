//! Galaxy interpreter CLI

use gxc::commands::{
    demodulate_text, eval_expr, interact_loop, load_interpreter, modulate_text, repl, send_text,
    CommandError,
};
use gxc::{init_tracing, Config, LineInput};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    let (config, positional) = match Config::from_args(&args[1..]) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let result = match command.as_str() {
        "run" => {
            let Some(script) = positional.first() else {
                usage_error("gx run <script> [options]");
            };
            run(script, &config)
        }
        "interact" => {
            let Some(script) = positional.first() else {
                usage_error("gx interact <script> [--protocol=<name>] [options]");
            };
            interact(script, &config)
        }
        "eval" => {
            let [script, expr @ ..] = positional.as_slice() else {
                usage_error("gx eval <script> <expression>");
            };
            if expr.is_empty() {
                usage_error("gx eval <script> <expression>");
            }
            eval(script, &expr.join(" "), &config)
        }
        "mod" => {
            if positional.is_empty() {
                usage_error("gx mod <data>");
            }
            modulate_text(&positional.join(" ")).map(|bits| println!("{bits}"))
        }
        "dem" => {
            let Some(bits) = positional.first() else {
                usage_error("gx dem <bits>");
            };
            demodulate_text(bits).map(|text| println!("{text}"))
        }
        "send" => {
            if positional.is_empty() {
                usage_error("gx send <data> [options]");
            }
            send(&positional.join(" "), &config)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("gx {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(script: &str, config: &Config) -> Result<(), CommandError> {
    let input = LineInput::stdin();
    let transport = gxc::transport::from_config(config, &input)?;
    let mut interp = load_interpreter(script, transport)?;
    repl(&mut interp, &input, &mut std::io::stdout())?;
    Ok(())
}

fn interact(script: &str, config: &Config) -> Result<(), CommandError> {
    let input = LineInput::stdin();
    let transport = gxc::transport::from_config(config, &input)?;
    let mut interp = load_interpreter(script, transport)?;
    interact_loop(&mut interp, &config.protocol, &input, &mut std::io::stdout())?;
    Ok(())
}

fn eval(script: &str, expr: &str, config: &Config) -> Result<(), CommandError> {
    let input = LineInput::stdin();
    let transport = gxc::transport::from_config(config, &input)?;
    let mut interp = load_interpreter(script, transport)?;
    print!("{}", eval_expr(&mut interp, expr)?);
    Ok(())
}

fn send(data: &str, config: &Config) -> Result<(), CommandError> {
    let input = LineInput::stdin();
    let mut transport = gxc::transport::from_config(config, &input)?;
    println!("{}", send_text(transport.as_mut(), data)?);
    Ok(())
}

fn usage_error(usage: &str) -> ! {
    eprintln!("Usage: {usage}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Galaxy interpreter");
    println!();
    println!("Usage: gx <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <script>            Load a script, then read lines from stdin");
    println!("  interact <script>       Drive the protocol with clicks read from stdin");
    println!("  eval <script> <expr>    Evaluate one expression against a script");
    println!("  mod <data>              Modulate data, e.g. `( 1 , ( 2 , 3 ) )`");
    println!("  dem <bits>              Demodulate a signal");
    println!("  send <data>             One round trip through the transport");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Options:");
    println!("  --endpoint=<url>        Server base URL (env GALAXY_ENDPOINT)");
    println!("  --api-key=<key>         API key (env GALAXY_API_KEY)");
    println!("  --transport=<kind>      http (default), console, none");
    println!("  --protocol=<name>       Protocol binding to interact with (default: galaxy)");
    println!("  --timeout=<secs>        HTTP timeout (default: 30)");
    println!();
    println!("Examples:");
    println!("  gx run galaxy.txt");
    println!("  gx interact galaxy.txt --transport=none");
    println!("  gx eval galaxy.txt 'ap ap statelessdraw nil ( 1 , 1 )'");
    println!("  gx mod 'ap ap cons 1 nil'");
    println!("  gx dem 110110000100");
    println!();
    println!("Set RUST_LOG=gx_eval=debug to trace interaction steps and round trips.");
}
