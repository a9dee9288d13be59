use crate::seq::growth;
use anyhow::Result;

// Range validation happens at the CLI boundary; by the time this runs the
// arguments are inside the documented bounds.
pub fn run(generations: u64, litter: u64) -> Result<()> {
    println!("{}", growth::population(generations, litter));
    Ok(())
}
