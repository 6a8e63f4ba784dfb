//! enumgen: safe Go enums from `// ENUM` comments.
//!
//! Reads a Go source file, finds every `// ENUM Name (a, b, c)` comment and
//! writes a Go file with one enum type per declaration.
//!
//! # Examples
//!
//! ```bash
//! # Write to stdout
//! enumgen -f auth.go
//!
//! # Write to a file, including YAML marshaling
//! enumgen -f auth.go -o auth_enums.go --yaml
//! ```

use clap::Parser;
use enumgen_cli::{Cli, runner};

fn main() {
    let cli = Cli::parse();

    let result = runner::init_logging(cli.verbose).and_then(|()| runner::execute(cli));
    let exit_code = runner::finish(result, &mut std::io::stderr().lock());

    std::process::exit(exit_code.as_i32());
}
