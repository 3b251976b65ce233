pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_CHECKMULTISIG: u8 = 0xae;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(b: Vec<u8>) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pay-to-pubkey: `<pubkey> OP_CHECKSIG`.
    pub fn p2pk(pubkey: &[u8]) -> Self {
        ScriptBuilder::new()
            .push_slice(pubkey)
            .push_opcode(OP_CHECKSIG)
            .into_script()
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // The top bit carries the sign; add a byte when the magnitude already uses it.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[derive(Clone, Debug, Default)]
pub struct ScriptBuilder {
    buf: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn push_opcode(mut self, op: u8) -> Self {
        self.buf.push(op);
        self
    }

    /// Pushes data with the smallest push opcode that fits its length.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let n = data.len();
        if n < OP_PUSHDATA1 as usize {
            self.buf.push(n as u8);
        } else if n <= 0xff {
            self.buf.push(OP_PUSHDATA1);
            self.buf.push(n as u8);
        } else if n <= 0xffff {
            self.buf.push(OP_PUSHDATA2);
            self.buf.extend_from_slice(&(n as u16).to_le_bytes());
        } else {
            self.buf.push(OP_PUSHDATA4);
            self.buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        self.buf.extend_from_slice(data);
        self
    }

    /// Pushes an integer, using `OP_0`, `OP_1NEGATE` and `OP_1..OP_16` for
    /// the values they represent.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n as u8) - 1),
            _ => self.push_slice(&script_num_bytes(n)),
        }
    }

    /// Pushes the script-number encoding of `n` as data, never as a small
    /// integer opcode.
    pub fn push_num(self, n: i64) -> Self {
        self.push_slice(&script_num_bytes(n))
    }

    pub fn into_script(self) -> Script {
        Script(self.buf)
    }
}
