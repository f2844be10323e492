//! Command-line arguments
//!
//! Long options keep their camelCase names (`--inputNetwork`, ...). The
//! two-letter single-dash aliases `-ci` and `-ii` are not expressible as clap
//! short flags, so argv is rewritten before parsing.

use crate::EnrichPaths;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const ALIASES: [(&str, &str); 2] = [("-ci", "--clusterInfo"), ("-ii", "--itemInfo")];

/// Command-line arguments for vos-enrich
#[derive(Parser, Debug)]
#[command(name = "vos-enrich")]
#[command(about = "Add information to a VOSviewer network file")]
#[command(version)]
pub struct Args {
    /// Input VOSviewer JSON network file
    #[arg(short = 'i', long = "inputNetwork", value_name = "PATH")]
    pub input_network: PathBuf,

    /// Output augmented VOSviewer JSON network file
    #[arg(short = 'o', long = "outputNetwork", value_name = "PATH")]
    pub output_network: PathBuf,

    /// Tab-separated file with cluster-level information (alias: -ci)
    #[arg(long = "clusterInfo", value_name = "PATH")]
    pub cluster_info: PathBuf,

    /// Tab-separated file with item-level information (alias: -ii)
    #[arg(long = "itemInfo", value_name = "PATH")]
    pub item_info: PathBuf,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse from raw argv, accepting the `-ci`/`-ii` aliases
    pub fn parse_normalized<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Same as [`Args::parse_normalized`] but returns clap errors instead of exiting
    pub fn try_parse_normalized<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// File locations for the pipeline
    pub fn paths(&self) -> EnrichPaths {
        EnrichPaths {
            input_network: self.input_network.clone(),
            output_network: self.output_network.clone(),
            cluster_info: self.cluster_info.clone(),
            item_info: self.item_info.clone(),
        }
    }
}

/// Rewrite `-ci`/`-ii` (and `-ci=PATH`/`-ii=PATH`) to their long forms
///
/// Arguments after a literal `--` are left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut options_done = false;

    args.into_iter()
        .map(|arg| {
            if options_done {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                options_done = true;
                return arg;
            }
            for (alias, long) in ALIASES {
                if text == alias {
                    return OsString::from(long);
                }
                if let Some(value) = text.strip_prefix(alias).and_then(|rest| rest.strip_prefix('=')) {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}
