mod utils;

use tfnorm_tensorflow::prelude::*;

use crate::utils::*;

fn conv_block() -> Vec<NodeDef> {
    let kernel: Vec<u8> = (0..3 * 3 * 8 * 16).flat_map(|i| (i as f32).to_le_bytes()).collect();
    vec![
        tfpb::node()
            .name("input")
            .op("Placeholder")
            .attr("dtype", DataType::DtFloat)
            .attr("shape", tfpb::shape(&[1, 32, 32, 8])),
        tfpb::node()
            .name("weights")
            .op("Const")
            .attr("dtype", DataType::DtFloat)
            .attr("value", tfpb::tensor_raw(DataType::DtFloat, &[3, 3, 8, 16], kernel)),
        tfpb::node()
            .name("bias")
            .op("Const")
            .attr("dtype", DataType::DtFloat)
            .attr("value", tfpb::tensor_f32(&[16], vec![0.25])),
        tfpb::node()
            .name("conv")
            .op("Conv2D")
            .input("input")
            .input("weights")
            .attr("T", DataType::DtFloat)
            .attr("data_format", "NHWC")
            .attr("padding", "SAME")
            .attr("strides", vec![1, 2, 1, 1])
            .attr("dilations", vec![1, 1, 3, 1])
            .attr("neuron", "Tanh"),
        tfpb::node()
            .name("pool")
            .op("AvgPool")
            .input("conv")
            .attr("data_format", "NCHW")
            .attr("ksize", vec![1, 1, 2, 4])
            .attr("strides", vec![1, 1, 2, 4]),
    ]
}

#[test]
fn conv_block_survives_the_wire() {
    let graph = through_the_wire(conv_block()).unwrap();

    let input = graph.node_by_name("input").unwrap();
    let dims: Vec<i64> = input.shape().unwrap().dim.iter().map(|d| d.size).collect();
    assert_eq!(dims, vec![1, 32, 32, 8]);

    let weights = graph.node_by_name("weights").unwrap();
    let shape = weights.shape().unwrap();
    assert_eq!(shape.to_shape(), KernelShape::new(3, 3, 8, 16));
    assert_eq!(shape.total_count(), 1152);
    let data = weights.value_data().unwrap();
    assert_eq!(data.len(), 1152 * 4);
    assert_eq!(&data[4..8], &1f32.to_le_bytes());

    let bias = graph.node_by_name("bias").unwrap();
    assert!(bias.shape().unwrap().is_bias());
    assert_eq!(bias.value_scalar(), Some(0.25));
    assert_eq!(bias.value_data(), Some(&[][..]));

    let conv = graph.node_by_name("conv").unwrap();
    assert_eq!(conv.data_format(), Some(DataFormat::NHWC));
    assert_eq!(conv.strides(), Some(Spatial::new(1, 2)));
    assert_eq!(conv.dilations(), Some(Spatial::new(3, 1)));
    assert_eq!(conv.activation_neuron(), ActivationNeuron::Tanh);
    assert_eq!(conv.value_scalar(), None);

    let pool = graph.node_by_name("pool").unwrap();
    assert_eq!(pool.ksize(), Some(Spatial::new(4, 2)));
    assert_eq!(pool.activation_neuron(), ActivationNeuron::None);
}

#[test]
fn accessors_leave_the_node_untouched() {
    let nodes = conv_block();
    let before = nodes.clone();
    for n in &nodes {
        let _ = NodeParams::for_node(n).unwrap();
    }
    assert_eq!(nodes, before);
}

#[test]
fn params_for_the_whole_graph() {
    let graph = through_the_wire(conv_block()).unwrap();
    let params = tensorflow()
        .node_params(&graph, |_| true)
        .map(|(n, p)| p.map(|p| (n, p)))
        .collect::<TfResult<Vec<_>>>()
        .unwrap();
    let names: Vec<&str> = params.iter().map(|(n, _)| &*n.name).collect();
    assert_eq!(names, vec!["input", "weights", "bias", "conv", "pool"]);
    let conv = &params[3].1;
    assert_eq!(
        conv.to_string(),
        "conv (Conv2D) format=NHWC strides=1x2 dilations=3x1 activation=Tanh"
    );
}

#[test]
fn queries_from_many_threads() {
    let graph = through_the_wire(conv_block()).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| graph.node_by_name("conv").unwrap().strides()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Some(Spatial::new(1, 2)));
        }
    });
}

#[test]
fn save_and_load_from_path() {
    setup_test_logger();
    let path = std::env::temp_dir().join(format!("tfnorm-roundtrip-{}.pb", std::process::id()));
    let graph = conv_block().into_iter().fold(tfpb::graph(), |g, n| g.node(n));
    graph.clone().save_to(&path).unwrap();
    let loaded = tensorflow().graph_for_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, graph);
    assert!(tensorflow().graph_for_path(&path).is_err());
}
