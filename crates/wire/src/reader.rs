use dug_domain::DomainError;

/// Bounds-checked cursor over a raw DNS message buffer.
///
/// All multi-byte reads are big-endian and fail with `MalformedMessage`
/// instead of panicking when the buffer runs out.
pub struct MessageReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> MessageReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Moves the cursor to an absolute offset. Seeking to the end of the
    /// buffer is allowed; any read from there fails.
    pub fn seek(&mut self, pos: usize) -> Result<(), DomainError> {
        if pos > self.buf.len() {
            return Err(DomainError::MalformedMessage(format!(
                "seek target {} beyond message end {}",
                pos,
                self.buf.len()
            )));
        }
        self.pos = pos;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        let byte = self
            .buf
            .get(self.pos)
            .copied()
            .ok_or_else(|| Self::truncated(self.pos, 1))?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Consumes `n` bytes and returns them as a slice of the underlying
    /// buffer.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], DomainError> {
        if self.pos + n > self.buf.len() {
            return Err(Self::truncated(self.pos, n));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DomainError> {
        if self.pos + n > self.buf.len() {
            return Err(Self::truncated(self.pos, n));
        }
        self.pos += n;
        Ok(())
    }

    fn truncated(pos: usize, needed: usize) -> DomainError {
        DomainError::MalformedMessage(format!(
            "message truncated: wanted {} byte(s) at offset {}",
            needed, pos
        ))
    }
}
