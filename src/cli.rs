use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

/// `killconn` utility.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct KillConnArgs {
    /// List mode: enumerate without resetting anything.
    #[arg(
        long,
        short = 'l',
        help = "List all established connections and exit without resetting anything"
    )]
    pub list: bool,

    /// Substring matched against owning process names.
    #[arg(
        long,
        short = 'p',
        name = "NAME",
        help = "Reset connections owned by processes whose name contains NAME (case-insensitive)",
        required_unless_present = "list"
    )]
    pub process: Option<String>,

    /// Remote-port criterion.
    #[arg(long, name = "PORT", help = "Reset only connections whose remote port equals PORT")]
    pub port: Option<u16>,

    /// A verbosity flag to control the level of logging output.
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// Dry-run flag to only display what would be done without taking action.
    #[arg(long, help = "Print the reset commands without executing them")]
    pub dry_run: bool,
}
