mod age;
mod birth;
mod clock;
mod expectancy;
mod report;
mod subject;

use anyhow::Result;
use clock::SystemClock;
use report::Report;
use subject::Subject;

fn main() -> Result<()> {
    let subject = Subject::load()?;

    let report = Report::build(&subject, &SystemClock, None)?;
    print!("{report}");

    Ok(())
}
