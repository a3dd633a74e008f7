use anyhow::Result;
use connpass_api::Client;

use super::events::FilterArgs;

/// Prints the request URL for the given filters without sending it.
pub fn run(args: &FilterArgs, client: &Client) -> Result<()> {
    let query = args.to_query()?;
    println!("{}", client.event_url(&query)?);
    Ok(())
}
