//! This module contains helper functionality shared across command tests.

use std::io::{BufWriter, Write};
use std::sync::{Arc, Mutex};

pub struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn create_dummy_write_buffer() -> BufWriter<Box<dyn Write>> {
    BufWriter::new(Box::new(DummyWrite {}))
}

pub struct SharedWrite {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn create_capture_write_buffer() -> (Arc<Mutex<Vec<u8>>>, BufWriter<Box<dyn Write>>) {
    let buffer = Arc::new(Mutex::new(Vec::default()));
    let writer = BufWriter::new(Box::new(SharedWrite { buffer: buffer.clone() }) as Box<dyn Write>);

    (buffer, writer)
}

pub fn get_captured_text(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
}
