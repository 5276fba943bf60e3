use tfnorm_tensorflow::prelude::*;

/// Writes a small NCHW conv + pool graph to `conv_block.pb`, for `tfnorm` to read.
fn main() -> TfResult<()> {
    let weights: Vec<u8> =
        (0..3 * 3 * 4 * 8).flat_map(|i| (i as f32 / 10.0).to_le_bytes()).collect();
    let graph = tfpb::graph()
        .node(
            tfpb::node()
                .name("input")
                .op("Placeholder")
                .attr("dtype", DataType::DtFloat)
                .attr("shape", tfpb::shape(&[1, 4, 64, 64])),
        )
        .node(
            tfpb::node()
                .name("weights")
                .op("Const")
                .attr("dtype", DataType::DtFloat)
                .attr("value", tfpb::tensor_raw(DataType::DtFloat, &[3, 3, 4, 8], weights)),
        )
        .node(
            tfpb::node()
                .name("conv")
                .op("Conv2D")
                .input("input")
                .input("weights")
                .attr("T", DataType::DtFloat)
                .attr("data_format", "NCHW")
                .attr("padding", "SAME")
                .attr("strides", vec![1, 1, 2, 2])
                .attr("dilations", vec![1, 1, 1, 1])
                .attr("neuron", "Relu"),
        )
        .node(
            tfpb::node()
                .name("pool")
                .op("MaxPool")
                .input("conv")
                .attr("data_format", "NCHW")
                .attr("padding", "VALID")
                .attr("ksize", vec![1, 1, 2, 2])
                .attr("strides", vec![1, 1, 2, 2]),
        );
    graph.save_to("conv_block.pb")
}
