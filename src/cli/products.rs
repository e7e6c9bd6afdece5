//! Products command.

use cpf_lookup::synthetic::PRODUCTS;

pub fn cmd_products() -> anyhow::Result<()> {
    for product in PRODUCTS {
        println!("{}", product);
    }
    Ok(())
}
