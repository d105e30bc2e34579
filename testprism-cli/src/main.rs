// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use testprism_cli::TestprismApp;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = TestprismApp::parse();
    app.exec()
}
