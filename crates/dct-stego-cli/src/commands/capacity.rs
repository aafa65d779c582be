use std::path::PathBuf;

use clap::Args;
use dct_stego_core::{CapacityPlan, DctCodecOptions};

use crate::CliResult;

/// Shows how long a message an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image to inspect
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: DctCodecOptions) -> CliResult<()> {
        let delimiter_len = options.delimiter.len();
        let plan = dct_stego_core::commands::capacity(&self.media, options)?;

        println!(
            "Padded size:  {}x{}",
            plan.padded_width, plan.padded_height
        );
        println!("Blocks:       {}", plan.total_blocks);
        println!(
            "Capacity:     {} bits ({} characters)",
            plan.max_capacity_bits,
            plan.available_bytes()
        );
        println!("{}", max_message_line(&plan, delimiter_len));
        Ok(())
    }
}

fn max_message_line(plan: &CapacityPlan, delimiter_len: usize) -> String {
    let max = plan.max_message_len(delimiter_len);
    if plan.is_block_aligned() {
        return format!("Max message:  {max} characters");
    }
    format!(
        "Max message:  {max} characters (image is padded to full blocks, \
         only {} characters are safe to round trip)",
        plan.safe_message_len(delimiter_len)
    )
}
