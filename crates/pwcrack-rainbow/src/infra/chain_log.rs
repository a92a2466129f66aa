//! Diagnostic chain log
//!
//! Text sink receiving every step of every chain during table generation.
//!
//! Block format per chain:
//!
//! ```text
//! (blank line)
//! (blank line)
//! PW:<start>
//! <password>@<hexdigest> <password>@<hexdigest> ...
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::domain::chain::ChainTrace;
use crate::domain::hash::format_digest;

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Create (or truncate) a buffered chain log file
pub fn create_chain_log(path: impl AsRef<Path>) -> io::Result<BufWriter<File>> {
    ensure_parent_dir(path.as_ref())?;
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Write one chain block
pub fn write_chain_block<W: Write + ?Sized>(sink: &mut W, trace: &ChainTrace) -> io::Result<()> {
    writeln!(sink)?;
    writeln!(sink)?;
    writeln!(sink, "PW:{}", trace.start)?;

    for step in &trace.steps {
        write!(sink, "{}@{} ", step.password, format_digest(&step.digest))?;
    }

    writeln!(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chain::ChainStep;
    use num_bigint::BigUint;

    #[test]
    fn test_write_chain_block_format() {
        let trace = ChainTrace {
            start: "00".into(),
            steps: vec![
                ChainStep {
                    password: "00".into(),
                    digest: BigUint::from(0xabcu32),
                },
                ChainStep {
                    password: "k3".into(),
                    digest: BigUint::from(0x0fu32),
                },
            ],
        };

        let mut buf = Vec::new();
        write_chain_block(&mut buf, &trace).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\n\nPW:00\n00@abc k3@f \n"
        );
    }

    #[test]
    fn test_write_chain_block_no_steps() {
        let trace = ChainTrace {
            start: "zz".into(),
            steps: Vec::new(),
        };

        let mut buf = Vec::new();
        write_chain_block(&mut buf, &trace).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\n\nPW:zz\n\n");
    }

    #[test]
    fn test_create_chain_log_nested_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("chains.txt");

        let mut sink = create_chain_log(&path).unwrap();
        writeln!(sink, "hello").unwrap();
        sink.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
