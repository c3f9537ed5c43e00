use crate::application::presenter::SpecificInformation;
use crate::error::Result;
use std::io::Write;

/// Writes payment details as `label,value` CSV rows.
pub struct InfoWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> InfoWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_information(&mut self, info: &SpecificInformation) -> Result<()> {
        self.writer.write_record(["label", "value"])?;
        for (label, value) in info.iter() {
            self.writer.write_record([label, value])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
