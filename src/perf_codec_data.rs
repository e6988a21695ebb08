use crate::perf::Measurement;
use std::sync::LazyLock;

// Encode/decode latencies (ns) measured with the Go benchmarks against
// payloads of 2^0 .. 2^10 bytes.

pub static PERF_DATA_ENCODE_NS: LazyLock<Vec<Measurement>> = LazyLock::new(|| {  vec![
Measurement { name: "JSON", payload_bytes: 1, latency: 159.1 },
Measurement { name: "JSON", payload_bytes: 2, latency: 335.7 },
Measurement { name: "JSON", payload_bytes: 4, latency: 576.7 },
Measurement { name: "JSON", payload_bytes: 8, latency: 737.4 },
Measurement { name: "JSON", payload_bytes: 16, latency: 889.0 },
Measurement { name: "JSON", payload_bytes: 32, latency: 1071.0 },
Measurement { name: "JSON", payload_bytes: 64, latency: 1241.0 },
Measurement { name: "JSON", payload_bytes: 128, latency: 1439.0 },
Measurement { name: "JSON", payload_bytes: 256, latency: 1582.0 },
Measurement { name: "JSON", payload_bytes: 512, latency: 1774.0 },
Measurement { name: "JSON", payload_bytes: 1024, latency: 1997.0 },
Measurement { name: "Gob", payload_bytes: 1, latency: 958.5 },
Measurement { name: "Gob", payload_bytes: 2, latency: 1092.0 },
Measurement { name: "Gob", payload_bytes: 4, latency: 1136.0 },
Measurement { name: "Gob", payload_bytes: 8, latency: 1213.0 },
Measurement { name: "Gob", payload_bytes: 16, latency: 1251.0 },
Measurement { name: "Gob", payload_bytes: 32, latency: 1291.0 },
Measurement { name: "Gob", payload_bytes: 64, latency: 1395.0 },
Measurement { name: "Gob", payload_bytes: 128, latency: 1492.0 },
Measurement { name: "Gob", payload_bytes: 256, latency: 1489.0 },
Measurement { name: "Gob", payload_bytes: 512, latency: 1570.0 },
Measurement { name: "Gob", payload_bytes: 1024, latency: 1621.0 },
Measurement { name: "Message Pack", payload_bytes: 1, latency: 145.5 },
Measurement { name: "Message Pack", payload_bytes: 2, latency: 279.8 },
Measurement { name: "Message Pack", payload_bytes: 4, latency: 386.8 },
Measurement { name: "Message Pack", payload_bytes: 8, latency: 491.7 },
Measurement { name: "Message Pack", payload_bytes: 16, latency: 631.8 },
Measurement { name: "Message Pack", payload_bytes: 32, latency: 712.8 },
Measurement { name: "Message Pack", payload_bytes: 64, latency: 807.4 },
Measurement { name: "Message Pack", payload_bytes: 128, latency: 903.2 },
Measurement { name: "Message Pack", payload_bytes: 256, latency: 1048.0 },
Measurement { name: "Message Pack", payload_bytes: 512, latency: 1198.0 },
Measurement { name: "Message Pack", payload_bytes: 1024, latency: 1312.0 },
] });

pub static PERF_DATA_DECODE_NS: LazyLock<Vec<Measurement>> = LazyLock::new(|| {  vec![
Measurement { name: "JSON", payload_bytes: 1, latency: 163.6 },
Measurement { name: "JSON", payload_bytes: 2, latency: 514.7 },
Measurement { name: "JSON", payload_bytes: 4, latency: 721.0 },
Measurement { name: "JSON", payload_bytes: 8, latency: 982.1 },
Measurement { name: "JSON", payload_bytes: 16, latency: 1215.0 },
Measurement { name: "JSON", payload_bytes: 32, latency: 1439.0 },
Measurement { name: "JSON", payload_bytes: 64, latency: 1680.0 },
Measurement { name: "JSON", payload_bytes: 128, latency: 1947.0 },
Measurement { name: "JSON", payload_bytes: 256, latency: 2178.0 },
Measurement { name: "JSON", payload_bytes: 512, latency: 2709.0 },
Measurement { name: "JSON", payload_bytes: 1024, latency: 2961.0 },
Measurement { name: "Gob", payload_bytes: 1, latency: 9922.0 },
Measurement { name: "Gob", payload_bytes: 2, latency: 9935.0 },
Measurement { name: "Gob", payload_bytes: 4, latency: 9946.0 },
Measurement { name: "Gob", payload_bytes: 8, latency: 9937.0 },
Measurement { name: "Gob", payload_bytes: 16, latency: 10100.0 },
Measurement { name: "Gob", payload_bytes: 32, latency: 10134.0 },
Measurement { name: "Gob", payload_bytes: 64, latency: 10102.0 },
Measurement { name: "Gob", payload_bytes: 128, latency: 10072.0 },
Measurement { name: "Gob", payload_bytes: 256, latency: 10221.0 },
Measurement { name: "Gob", payload_bytes: 512, latency: 10400.0 },
Measurement { name: "Gob", payload_bytes: 1024, latency: 10562.0 },
Measurement { name: "Message Pack", payload_bytes: 1, latency: 139.6 },
Measurement { name: "Message Pack", payload_bytes: 2, latency: 358.2 },
Measurement { name: "Message Pack", payload_bytes: 4, latency: 525.3 },
Measurement { name: "Message Pack", payload_bytes: 8, latency: 713.8 },
Measurement { name: "Message Pack", payload_bytes: 16, latency: 857.3 },
Measurement { name: "Message Pack", payload_bytes: 32, latency: 1035.0 },
Measurement { name: "Message Pack", payload_bytes: 64, latency: 1238.0 },
Measurement { name: "Message Pack", payload_bytes: 128, latency: 1421.0 },
Measurement { name: "Message Pack", payload_bytes: 256, latency: 1516.0 },
Measurement { name: "Message Pack", payload_bytes: 512, latency: 1848.0 },
Measurement { name: "Message Pack", payload_bytes: 1024, latency: 2010.0 },
] });
