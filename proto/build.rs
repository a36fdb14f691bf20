extern crate protobuf_codegen_pure;

fn main() {
    let protos = [
        "p4runtime/proto/p4/v1/p4runtime.proto",
        "p4runtime/proto/p4/config/v1/p4info.proto",
        "protobuf/google/protobuf/any.proto",
    ];
    for proto in &protos {
        println!("cargo:rerun-if-changed={}", proto);
    }
    protobuf_codegen_pure::Codegen::new()
        .out_dir("src/")
        .inputs(&protos[..2])
        .include("p4runtime/proto")
        .include("protobuf")
        .run()
        .expect("Failed to compile P4Runtime definitions!");
}
