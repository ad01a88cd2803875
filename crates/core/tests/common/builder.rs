//! Fluent builder for text instruction traces.

/// Builds a trace: a header line followed by one line per instruction.
#[derive(Clone, Debug)]
pub struct TraceBuilder {
    phys_regs: usize,
    width: usize,
    lines: Vec<String>,
}

impl TraceBuilder {
    pub fn new(phys_regs: usize, width: usize) -> Self {
        Self {
            phys_regs,
            width,
            lines: Vec::new(),
        }
    }

    /// `R,dst,src0,src1`
    pub fn reg_op(mut self, dst: usize, src0: usize, src1: usize) -> Self {
        self.lines.push(format!("R,{dst},{src0},{src1}"));
        self
    }

    /// `I,dst,src0,imm`
    pub fn imm_op(mut self, dst: usize, src0: usize, imm: u64) -> Self {
        self.lines.push(format!("I,{dst},{src0},{imm}"));
        self
    }

    /// `L,dst,offset,base`
    pub fn load(mut self, dst: usize, offset: u64, base: usize) -> Self {
        self.lines.push(format!("L,{dst},{offset},{base}"));
        self
    }

    /// `S,value,offset,base`
    pub fn store(mut self, value: usize, offset: u64, base: usize) -> Self {
        self.lines.push(format!("S,{value},{offset},{base}"));
        self
    }

    /// Appends a raw line, for malformed-input tests.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn build(&self) -> String {
        let mut text = format!("{},{}\n", self.phys_regs, self.width);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
