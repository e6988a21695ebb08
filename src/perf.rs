#[derive(Debug, Clone, Copy)]
pub struct Measurement<'a> {
    pub name: &'a str,
    pub payload_bytes: u64,
    pub latency: f64,
}
