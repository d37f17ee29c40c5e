#![allow(dead_code)]

use assert_cmd::cargo_bin;
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::process::Command;

/// A command for the binary with its cart stored under `store_dir`.
pub fn cart_cmd(store_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("storefront-cart"));
    cmd.arg("--store-dir").arg(store_dir);
    cmd.env_remove("STOREFRONT_STORE_DIR");
    cmd
}

/// Writes `rows` random events over `product_ids` to `path`.
pub fn generate_events_csv(path: &Path, rows: usize, product_ids: &[u32]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["action", "product", "quantity"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let product = product_ids[rng.gen_range(0..product_ids.len())].to_string();
        let (action, quantity) = match rng.gen_range(0..10) {
            0..=4 => ("add", rng.gen_range(1..4).to_string()),
            5 => ("remove", String::new()),
            6 => ("update", rng.gen_range(-1..6).to_string()),
            7 => ("increment", String::new()),
            8 => ("decrement", String::new()),
            _ => ("clear", String::new()),
        };
        wtr.write_record([action, product.as_str(), quantity.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
