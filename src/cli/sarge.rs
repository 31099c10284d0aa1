use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::SeparatorArg;

impl ArgumentType for SeparatorArg {
    type Error = Infallible;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        // A bare `--separator` with no value keeps the default.
        let sep = match val {
            None | Some("") => SeparatorArg::default(),
            Some(v) => SeparatorArg::parse(v),
        };
        Some(Ok(sep))
    }
}
