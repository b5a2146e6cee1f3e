//! Build script for the image lookup gRPC client.
//!
//! `protoc` is not available in this build environment (no system binary,
//! no network to fetch one), so we cannot run the usual
//! `tonic_build::compile_protos` path, which shells out to `protoc`.
//!
//! Instead we construct the `FileDescriptorSet` that `protoc` would have
//! produced for `../../proto/dish_images.proto` directly (the descriptor is
//! a faithful, field-for-field transcription of that `.proto` file), hand it
//! to prost/tonic via `file_descriptor_set_path` + `skip_protoc_run`, and let
//! tonic-build perform the exact same code generation it normally would. The
//! generated client/server code is identical to the protoc-backed build.

use std::path::PathBuf;

use prost::Message;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MethodDescriptorProto, OneofDescriptorProto, ServiceDescriptorProto,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../../proto/dish_images.proto");
    println!("cargo:rerun-if-changed=../../proto");
    println!("cargo:rerun-if-changed=build.rs");

    // message LookupRequest {
    //   string dish_name = 1;
    //   string dish_description = 2;
    // }
    let lookup_request = DescriptorProto {
        name: Some("LookupRequest".to_string()),
        field: vec![
            FieldDescriptorProto {
                name: Some("dish_name".to_string()),
                number: Some(1),
                label: Some(Label::Optional as i32),
                r#type: Some(Type::String as i32),
                json_name: Some("dishName".to_string()),
                ..Default::default()
            },
            FieldDescriptorProto {
                name: Some("dish_description".to_string()),
                number: Some(2),
                label: Some(Label::Optional as i32),
                r#type: Some(Type::String as i32),
                json_name: Some("dishDescription".to_string()),
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    // message LookupResponse {
    //   optional string image_url = 1;
    //   bool cached = 2;
    // }
    //
    // A proto3 `optional` field is modelled as a synthetic, single-member
    // oneof: the field carries `proto3_optional = true` and an `oneof_index`
    // pointing at a oneof named `_<field>`. prost recognises this shape and
    // generates `Option<String>` (not a generated oneof enum).
    let lookup_response = DescriptorProto {
        name: Some("LookupResponse".to_string()),
        field: vec![
            FieldDescriptorProto {
                name: Some("image_url".to_string()),
                number: Some(1),
                label: Some(Label::Optional as i32),
                r#type: Some(Type::String as i32),
                oneof_index: Some(0),
                proto3_optional: Some(true),
                json_name: Some("imageUrl".to_string()),
                ..Default::default()
            },
            FieldDescriptorProto {
                name: Some("cached".to_string()),
                number: Some(2),
                label: Some(Label::Optional as i32),
                r#type: Some(Type::Bool as i32),
                json_name: Some("cached".to_string()),
                ..Default::default()
            },
        ],
        oneof_decl: vec![OneofDescriptorProto {
            name: Some("_image_url".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    // service ImageLookup {
    //   rpc LookupImage (LookupRequest) returns (LookupResponse);
    // }
    let image_lookup = ServiceDescriptorProto {
        name: Some("ImageLookup".to_string()),
        method: vec![MethodDescriptorProto {
            name: Some("LookupImage".to_string()),
            input_type: Some(".dish_images.LookupRequest".to_string()),
            output_type: Some(".dish_images.LookupResponse".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let file = FileDescriptorProto {
        name: Some("dish_images.proto".to_string()),
        package: Some("dish_images".to_string()),
        message_type: vec![lookup_request, lookup_response],
        service: vec![image_lookup],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    };

    let fds = FileDescriptorSet { file: vec![file] };

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let fds_path = out_dir.join("dish_images.fds");
    let mut buf = Vec::new();
    fds.encode(&mut buf)?;
    std::fs::write(&fds_path, &buf)?;

    tonic_build::configure()
        .file_descriptor_set_path(&fds_path)
        .skip_protoc_run()
        .compile(&["../../proto/dish_images.proto"], &["../../proto"])?;

    Ok(())
}
