pub mod agent;
pub(crate) mod error;
pub mod hive;
pub(crate) mod movelist;
pub(crate) mod options;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        error::{Error, Kind, Result},
        hive::*,
        movelist,
        options::{Cli, ExpansionOptions, Options},
    };
}
