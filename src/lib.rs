mod advisor;
mod cube;
mod snapshot;
mod utils;
mod validator;
mod workbench;

pub use advisor::*;
pub use cube::*;
pub use snapshot::*;
pub use utils::*;
pub use validator::*;
pub use workbench::*;

use colored::*;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use Face::*;
use Rotation::*;
