use std::io::{self, Read, Seek, SeekFrom};

pub struct LittleEndianReader<R> {
    inner: R,
}

impl<R: Read + Seek> LittleEndianReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn read_i32(&mut self) -> io::Result<i32> {
        let mut buf = [0u8; 4];
        self.inner.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    pub fn read_i32_vec(&mut self, n: usize) -> io::Result<Vec<i32>> {
        let mut result = Vec::with_capacity(n);
        for _ in 0..n {
            result.push(self.read_i32()?);
        }
        Ok(result)
    }

    pub fn read_bytes(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Skip exactly `n` bytes. Unlike a bare seek, this fails with
    /// `UnexpectedEof` when fewer than `n` bytes remain, so truncation
    /// inside a reserved span is detected at the span, not at some later
    /// read (or never, if the span is the last field in the stream).
    pub fn skip(&mut self, n: u64) -> io::Result<()> {
        let cur = self.position()?;
        let end = self.len()?;
        if cur.checked_add(n).is_none_or(|wanted| wanted > end) {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("cannot skip {n} bytes at offset {cur}, stream ends at {end}"),
            ));
        }
        self.inner.seek(SeekFrom::Current(n as i64))?;
        Ok(())
    }

    pub fn position(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }

    pub fn len(&mut self) -> io::Result<u64> {
        let cur = self.position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(cur))?;
        Ok(end)
    }

    pub fn remaining(&mut self) -> io::Result<u64> {
        let cur = self.position()?;
        Ok(self.len()?.saturating_sub(cur))
    }

    pub fn is_empty(&mut self) -> io::Result<bool> {
        Ok(self.len()? == 0)
    }
}
