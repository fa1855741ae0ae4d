//! lifeguard-tinydb - Document Store Inspector
//!
//! 保存済みのバリデーション結果と通知状態を表示

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use lifeguard_tinydb::driver::{Args, InspectWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Resolve the database location once; the open store keeps this path
    let settings = args.settings();

    let workflow = InspectWorkflow::new(&settings)?;
    workflow.execute(&args.command)?;
    workflow.close();

    Ok(())
}
