//! `podpath init`: Declare driver capabilities.

use podpath_common::types::DriverOutput;
use podpath_core::driver::Driver;

/// Executes the `init` call.
pub fn execute(driver: &Driver) -> DriverOutput {
    driver.init()
}
