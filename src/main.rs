use perf::Measurement;
use perf_codec_data::PERF_DATA_DECODE_NS;
use perf_codec_data::PERF_DATA_ENCODE_NS;
use plotters::prelude::SVGBackend;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::error::Error;
use thousands::Separable;

mod perf;
mod perf_codec_data;

fn main() {
    write_plot(
        &PERF_DATA_ENCODE_NS,
        "Encode latency by payload size",
        "Latency",
        "encode.svg",
    )
    .expect("failed to plot");

    write_plot(
        &PERF_DATA_DECODE_NS,
        "Decode latency by payload size",
        "Latency",
        "decode.svg",
    )
    .expect("failed to plot");
}

const FONT: &str = "Fira Code";
const PLOT_WIDTH: u32 = 800;
const PLOT_HEIGHT: u32 = 400;

fn group_by_name<'a>(records: &'a [Measurement<'a>]) -> BTreeMap<&'a str, Vec<&'a Measurement<'a>>> {
    let mut groups: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();

    for record in records.iter() {
        let group = groups.entry(record.name).or_insert_with(Vec::new);
        group.push(record);
    }

    groups
}

// Every series must have one point per payload size or the chart would
// silently connect truncated lines.
fn payload_axis(groups: &BTreeMap<&str, Vec<&Measurement>>) -> Result<Vec<u64>, Box<dyn Error>> {
    let axis: Vec<u64> = groups
        .values()
        .flatten()
        .map(|record| record.payload_bytes)
        .collect::<BTreeSet<u64>>()
        .into_iter()
        .collect();

    if axis.is_empty() {
        return Err("no measurements to plot".into());
    }

    for (name, group) in groups.iter() {
        if group.len() != axis.len() {
            return Err(format!(
                "series '{}' has {} points but the x axis has {}",
                name,
                group.len(),
                axis.len()
            )
            .into());
        }
    }

    Ok(axis)
}

pub fn write_plot(
    records: &[Measurement],
    caption: &str,
    y_label: &str,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let mut color_map = HashMap::new();
    color_map.insert("JSON", RED);
    color_map.insert("Gob", GREEN);
    color_map.insert("Message Pack", BLUE);

    let groups = group_by_name(records);
    let axis = payload_axis(&groups)?;

    let resolution = (PLOT_WIDTH, PLOT_HEIGHT);
    let root = SVGBackend::new(path, resolution).into_drawing_area();

    root.fill(&WHITE)?;

    let y_min = records.iter().map(|m| m.latency).fold(f64::INFINITY, f64::min);
    let y_max = records.iter().map(|m| m.latency).fold(f64::NEG_INFINITY, f64::max);
    let y_diff = y_max - y_min;
    let y_padding = (y_diff / 10.0).min(y_min);

    let x_min = axis[0];
    let x_max = axis[axis.len() - 1];

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(caption, (FONT, 20))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Right, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_min..x_max, y_min - y_padding..y_max + y_padding)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_label_formatter(&|v| v.separate_with_commas())
        .y_label_formatter(&|v| format!("{:.0} ns", v))
        .x_labels(20)
        .y_labels(20)
        .y_desc(y_label)
        .x_desc("Payload size (bytes)")
        .draw()?;

    for (name, group) in groups.iter() {
        let color = color_map.get(name).copied().unwrap_or(BLACK);
        chart
            .draw_series(LineSeries::new(
                group.iter().map(|record| (record.payload_bytes, record.latency)),
                color,
            ))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, 13))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_format() {
        let groups = group_by_name(&PERF_DATA_ENCODE_NS);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups["JSON"].len(), 11);
        assert_eq!(groups["Gob"].len(), 11);
        assert_eq!(groups["Message Pack"].len(), 11);
    }

    #[test]
    fn test_payload_axis_is_powers_of_two() {
        let groups = group_by_name(&PERF_DATA_DECODE_NS);
        let axis = payload_axis(&groups).unwrap();

        let expected: Vec<u64> = (0..11).map(|exp| 1u64 << exp).collect();
        assert_eq!(axis, expected);
        assert!(axis.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_encode_json_endpoints() {
        let json: Vec<_> = PERF_DATA_ENCODE_NS
            .iter()
            .filter(|m| m.name == "JSON")
            .collect();

        assert_eq!(json.len(), 11);
        assert_eq!((json[0].payload_bytes, json[0].latency), (1, 159.1));
        assert_eq!((json[10].payload_bytes, json[10].latency), (1024, 1997.0));
    }

    #[test]
    fn test_decode_gob_dominates() {
        let gob_min = PERF_DATA_DECODE_NS
            .iter()
            .filter(|m| m.name == "Gob")
            .map(|m| m.latency)
            .fold(f64::INFINITY, f64::min);
        let other_max = PERF_DATA_DECODE_NS
            .iter()
            .filter(|m| m.name != "Gob")
            .map(|m| m.latency)
            .fold(f64::NEG_INFINITY, f64::max);

        assert!(gob_min > other_max);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let groups = group_by_name(&[]);
        assert!(payload_axis(&groups).is_err());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        // "short" stops at 512 bytes while "full" covers all 11 sizes.
        let mut records = Vec::new();
        for exp in 0..11u32 {
            records.push(Measurement {
                name: "full",
                payload_bytes: 1 << exp,
                latency: 100.0 + f64::from(exp),
            });
        }
        for exp in 0..10u32 {
            records.push(Measurement {
                name: "short",
                payload_bytes: 1 << exp,
                latency: 200.0 + f64::from(exp),
            });
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mismatch.svg");
        let result = write_plot(&records, "mismatch", "Latency", path.to_str().unwrap());

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("short"));
    }

    #[test]
    fn test_sequential_plots_do_not_leak() {
        let dir = tempfile::tempdir().unwrap();
        let encode_path = dir.path().join("encode.svg");
        let decode_path = dir.path().join("decode.svg");

        write_plot(
            &PERF_DATA_ENCODE_NS,
            "Encode latency by payload size",
            "Latency",
            encode_path.to_str().unwrap(),
        )
        .unwrap();
        write_plot(
            &PERF_DATA_DECODE_NS,
            "Decode latency by payload size",
            "Latency",
            decode_path.to_str().unwrap(),
        )
        .unwrap();

        let encode_svg = std::fs::read_to_string(&encode_path).unwrap();
        let decode_svg = std::fs::read_to_string(&decode_path).unwrap();

        for svg in [&encode_svg, &decode_svg] {
            // One legend entry per format.
            assert_eq!(svg.matches("JSON").count(), 1);
            assert_eq!(svg.matches("Gob").count(), 1);
            assert_eq!(svg.matches("Message Pack").count(), 1);

            // One line plus one legend marker per format.
            let upper = svg.to_uppercase();
            assert_eq!(upper.matches("#FF0000").count(), 2);
            assert_eq!(upper.matches("#00FF00").count(), 2);
            assert_eq!(upper.matches("#0000FF").count(), 2);
        }
    }
}
