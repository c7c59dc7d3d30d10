use iconstrip::Result;

use iconstrip::cli::{get_config, init_logging, run};

fn main() -> Result<()> {
    let config = get_config()?;
    init_logging(config.log_level);
    run(config)?;

    Ok(())
}
