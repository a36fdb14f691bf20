// This file is generated by rust-protobuf 2.28.0. Do not edit
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(box_pointers)]
#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_imports)]
#![allow(unused_results)]
//! Generated file from `p4/v1/p4runtime.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
// const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_2_28_0;

#[derive(PartialEq,Clone,Default)]
pub struct WriteRequest {
    // message fields
    pub device_id: u64,
    pub role_id: u64,
    pub role: ::std::string::String,
    pub election_id: ::protobuf::SingularPtrField<Uint128>,
    pub updates: ::protobuf::RepeatedField<Update>,
    pub atomicity: WriteRequest_Atomicity,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a WriteRequest {
    fn default() -> &'a WriteRequest {
        <WriteRequest as ::protobuf::Message>::default_instance()
    }
}

impl WriteRequest {
    pub fn new() -> WriteRequest {
        ::std::default::Default::default()
    }

    // uint64 device_id = 1;


    pub fn get_device_id(&self) -> u64 {
        self.device_id
    }
    pub fn clear_device_id(&mut self) {
        self.device_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_device_id(&mut self, v: u64) {
        self.device_id = v;
    }

    // uint64 role_id = 2;


    pub fn get_role_id(&self) -> u64 {
        self.role_id
    }
    pub fn clear_role_id(&mut self) {
        self.role_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_role_id(&mut self, v: u64) {
        self.role_id = v;
    }

    // string role = 6;


    pub fn get_role(&self) -> &str {
        &self.role
    }
    pub fn clear_role(&mut self) {
        self.role.clear();
    }

    // Param is passed by value, moved
    pub fn set_role(&mut self, v: ::std::string::String) {
        self.role = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_role(&mut self) -> &mut ::std::string::String {
        &mut self.role
    }

    // Take field
    pub fn take_role(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.role, ::std::string::String::new())
    }

    // .p4.v1.Uint128 election_id = 3;


    pub fn get_election_id(&self) -> &Uint128 {
        self.election_id.as_ref().unwrap_or_else(|| <Uint128 as ::protobuf::Message>::default_instance())
    }
    pub fn clear_election_id(&mut self) {
        self.election_id.clear();
    }

    pub fn has_election_id(&self) -> bool {
        self.election_id.is_some()
    }

    // Param is passed by value, moved
    pub fn set_election_id(&mut self, v: Uint128) {
        self.election_id = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_election_id(&mut self) -> &mut Uint128 {
        if self.election_id.is_none() {
            self.election_id.set_default();
        }
        self.election_id.as_mut().unwrap()
    }

    // Take field
    pub fn take_election_id(&mut self) -> Uint128 {
        self.election_id.take().unwrap_or_else(|| Uint128::new())
    }

    // repeated .p4.v1.Update updates = 4;


    pub fn get_updates(&self) -> &[Update] {
        &self.updates
    }
    pub fn clear_updates(&mut self) {
        self.updates.clear();
    }

    // Param is passed by value, moved
    pub fn set_updates(&mut self, v: ::protobuf::RepeatedField<Update>) {
        self.updates = v;
    }

    // Mutable pointer to the field.
    pub fn mut_updates(&mut self) -> &mut ::protobuf::RepeatedField<Update> {
        &mut self.updates
    }

    // Take field
    pub fn take_updates(&mut self) -> ::protobuf::RepeatedField<Update> {
        ::std::mem::replace(&mut self.updates, ::protobuf::RepeatedField::new())
    }

    // .p4.v1.WriteRequest.Atomicity atomicity = 5;


    pub fn get_atomicity(&self) -> WriteRequest_Atomicity {
        self.atomicity
    }
    pub fn clear_atomicity(&mut self) {
        self.atomicity = WriteRequest_Atomicity::CONTINUE_ON_ERROR;
    }

    // Param is passed by value, moved
    pub fn set_atomicity(&mut self, v: WriteRequest_Atomicity) {
        self.atomicity = v;
    }
}

impl ::protobuf::Message for WriteRequest {
    fn is_initialized(&self) -> bool {
        for v in &self.election_id {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.updates {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint64()?;
                    self.device_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint64()?;
                    self.role_id = tmp;
                },
                6 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.role)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.election_id)?;
                },
                4 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.updates)?;
                },
                5 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.atomicity, 5, &mut self.unknown_fields)?
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.device_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.device_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.role_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.role_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.role.is_empty() {
            my_size += ::protobuf::rt::string_size(6, &self.role);
        }
        if let Some(ref v) = self.election_id.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.updates {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        if self.atomicity != WriteRequest_Atomicity::CONTINUE_ON_ERROR {
            my_size += ::protobuf::rt::enum_size(5, self.atomicity);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.device_id != 0 {
            os.write_uint64(1, self.device_id)?;
        }
        if self.role_id != 0 {
            os.write_uint64(2, self.role_id)?;
        }
        if !self.role.is_empty() {
            os.write_string(6, &self.role)?;
        }
        if let Some(ref v) = self.election_id.as_ref() {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.updates {
            os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        if self.atomicity != WriteRequest_Atomicity::CONTINUE_ON_ERROR {
            os.write_enum(5, ::protobuf::ProtobufEnum::value(&self.atomicity))?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> WriteRequest {
        WriteRequest::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint64>(
                "device_id",
                |m: &WriteRequest| { &m.device_id },
                |m: &mut WriteRequest| { &mut m.device_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint64>(
                "role_id",
                |m: &WriteRequest| { &m.role_id },
                |m: &mut WriteRequest| { &mut m.role_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "role",
                |m: &WriteRequest| { &m.role },
                |m: &mut WriteRequest| { &mut m.role },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Uint128>>(
                "election_id",
                |m: &WriteRequest| { &m.election_id },
                |m: &mut WriteRequest| { &mut m.election_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Update>>(
                "updates",
                |m: &WriteRequest| { &m.updates },
                |m: &mut WriteRequest| { &mut m.updates },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<WriteRequest_Atomicity>>(
                "atomicity",
                |m: &WriteRequest| { &m.atomicity },
                |m: &mut WriteRequest| { &mut m.atomicity },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<WriteRequest>(
                "WriteRequest",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static WriteRequest {
        static instance: ::protobuf::rt::LazyV2<WriteRequest> = ::protobuf::rt::LazyV2::INIT;
        instance.get(WriteRequest::new)
    }
}

impl ::protobuf::Clear for WriteRequest {
    fn clear(&mut self) {
        self.device_id = 0;
        self.role_id = 0;
        self.role.clear();
        self.election_id.clear();
        self.updates.clear();
        self.atomicity = WriteRequest_Atomicity::CONTINUE_ON_ERROR;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for WriteRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for WriteRequest {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum WriteRequest_Atomicity {
    CONTINUE_ON_ERROR = 0,
    ROLLBACK_ON_ERROR = 1,
    DATAPLANE_ATOMIC = 2,
}

impl ::protobuf::ProtobufEnum for WriteRequest_Atomicity {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<WriteRequest_Atomicity> {
        match value {
            0 => ::std::option::Option::Some(WriteRequest_Atomicity::CONTINUE_ON_ERROR),
            1 => ::std::option::Option::Some(WriteRequest_Atomicity::ROLLBACK_ON_ERROR),
            2 => ::std::option::Option::Some(WriteRequest_Atomicity::DATAPLANE_ATOMIC),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [WriteRequest_Atomicity] = &[
            WriteRequest_Atomicity::CONTINUE_ON_ERROR,
            WriteRequest_Atomicity::ROLLBACK_ON_ERROR,
            WriteRequest_Atomicity::DATAPLANE_ATOMIC,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<WriteRequest_Atomicity>("WriteRequest.Atomicity", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for WriteRequest_Atomicity {
}

impl ::std::default::Default for WriteRequest_Atomicity {
    fn default() -> Self {
        WriteRequest_Atomicity::CONTINUE_ON_ERROR
    }
}

impl ::protobuf::reflect::ProtobufValue for WriteRequest_Atomicity {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct WriteResponse {
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a WriteResponse {
    fn default() -> &'a WriteResponse {
        <WriteResponse as ::protobuf::Message>::default_instance()
    }
}

impl WriteResponse {
    pub fn new() -> WriteResponse {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for WriteResponse {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> WriteResponse {
        WriteResponse::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let fields = ::std::vec::Vec::new();
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<WriteResponse>(
                "WriteResponse",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static WriteResponse {
        static instance: ::protobuf::rt::LazyV2<WriteResponse> = ::protobuf::rt::LazyV2::INIT;
        instance.get(WriteResponse::new)
    }
}

impl ::protobuf::Clear for WriteResponse {
    fn clear(&mut self) {
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for WriteResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for WriteResponse {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ReadRequest {
    // message fields
    pub device_id: u64,
    pub role: ::std::string::String,
    pub entities: ::protobuf::RepeatedField<Entity>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ReadRequest {
    fn default() -> &'a ReadRequest {
        <ReadRequest as ::protobuf::Message>::default_instance()
    }
}

impl ReadRequest {
    pub fn new() -> ReadRequest {
        ::std::default::Default::default()
    }

    // uint64 device_id = 1;


    pub fn get_device_id(&self) -> u64 {
        self.device_id
    }
    pub fn clear_device_id(&mut self) {
        self.device_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_device_id(&mut self, v: u64) {
        self.device_id = v;
    }

    // string role = 3;


    pub fn get_role(&self) -> &str {
        &self.role
    }
    pub fn clear_role(&mut self) {
        self.role.clear();
    }

    // Param is passed by value, moved
    pub fn set_role(&mut self, v: ::std::string::String) {
        self.role = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_role(&mut self) -> &mut ::std::string::String {
        &mut self.role
    }

    // Take field
    pub fn take_role(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.role, ::std::string::String::new())
    }

    // repeated .p4.v1.Entity entities = 2;


    pub fn get_entities(&self) -> &[Entity] {
        &self.entities
    }
    pub fn clear_entities(&mut self) {
        self.entities.clear();
    }

    // Param is passed by value, moved
    pub fn set_entities(&mut self, v: ::protobuf::RepeatedField<Entity>) {
        self.entities = v;
    }

    // Mutable pointer to the field.
    pub fn mut_entities(&mut self) -> &mut ::protobuf::RepeatedField<Entity> {
        &mut self.entities
    }

    // Take field
    pub fn take_entities(&mut self) -> ::protobuf::RepeatedField<Entity> {
        ::std::mem::replace(&mut self.entities, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for ReadRequest {
    fn is_initialized(&self) -> bool {
        for v in &self.entities {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint64()?;
                    self.device_id = tmp;
                },
                3 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.role)?;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.entities)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.device_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.device_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.role.is_empty() {
            my_size += ::protobuf::rt::string_size(3, &self.role);
        }
        for value in &self.entities {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.device_id != 0 {
            os.write_uint64(1, self.device_id)?;
        }
        if !self.role.is_empty() {
            os.write_string(3, &self.role)?;
        }
        for v in &self.entities {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ReadRequest {
        ReadRequest::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint64>(
                "device_id",
                |m: &ReadRequest| { &m.device_id },
                |m: &mut ReadRequest| { &mut m.device_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "role",
                |m: &ReadRequest| { &m.role },
                |m: &mut ReadRequest| { &mut m.role },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Entity>>(
                "entities",
                |m: &ReadRequest| { &m.entities },
                |m: &mut ReadRequest| { &mut m.entities },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ReadRequest>(
                "ReadRequest",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ReadRequest {
        static instance: ::protobuf::rt::LazyV2<ReadRequest> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ReadRequest::new)
    }
}

impl ::protobuf::Clear for ReadRequest {
    fn clear(&mut self) {
        self.device_id = 0;
        self.role.clear();
        self.entities.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ReadRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ReadRequest {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ReadResponse {
    // message fields
    pub entities: ::protobuf::RepeatedField<Entity>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ReadResponse {
    fn default() -> &'a ReadResponse {
        <ReadResponse as ::protobuf::Message>::default_instance()
    }
}

impl ReadResponse {
    pub fn new() -> ReadResponse {
        ::std::default::Default::default()
    }

    // repeated .p4.v1.Entity entities = 1;


    pub fn get_entities(&self) -> &[Entity] {
        &self.entities
    }
    pub fn clear_entities(&mut self) {
        self.entities.clear();
    }

    // Param is passed by value, moved
    pub fn set_entities(&mut self, v: ::protobuf::RepeatedField<Entity>) {
        self.entities = v;
    }

    // Mutable pointer to the field.
    pub fn mut_entities(&mut self) -> &mut ::protobuf::RepeatedField<Entity> {
        &mut self.entities
    }

    // Take field
    pub fn take_entities(&mut self) -> ::protobuf::RepeatedField<Entity> {
        ::std::mem::replace(&mut self.entities, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for ReadResponse {
    fn is_initialized(&self) -> bool {
        for v in &self.entities {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.entities)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.entities {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.entities {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ReadResponse {
        ReadResponse::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Entity>>(
                "entities",
                |m: &ReadResponse| { &m.entities },
                |m: &mut ReadResponse| { &mut m.entities },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ReadResponse>(
                "ReadResponse",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ReadResponse {
        static instance: ::protobuf::rt::LazyV2<ReadResponse> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ReadResponse::new)
    }
}

impl ::protobuf::Clear for ReadResponse {
    fn clear(&mut self) {
        self.entities.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ReadResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ReadResponse {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Update {
    // message fields
    pub field_type: Update_Type,
    pub entity: ::protobuf::SingularPtrField<Entity>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Update {
    fn default() -> &'a Update {
        <Update as ::protobuf::Message>::default_instance()
    }
}

impl Update {
    pub fn new() -> Update {
        ::std::default::Default::default()
    }

    // .p4.v1.Update.Type type = 1;


    pub fn get_field_type(&self) -> Update_Type {
        self.field_type
    }
    pub fn clear_field_type(&mut self) {
        self.field_type = Update_Type::UNSPECIFIED;
    }

    // Param is passed by value, moved
    pub fn set_field_type(&mut self, v: Update_Type) {
        self.field_type = v;
    }

    // .p4.v1.Entity entity = 2;


    pub fn get_entity(&self) -> &Entity {
        self.entity.as_ref().unwrap_or_else(|| <Entity as ::protobuf::Message>::default_instance())
    }
    pub fn clear_entity(&mut self) {
        self.entity.clear();
    }

    pub fn has_entity(&self) -> bool {
        self.entity.is_some()
    }

    // Param is passed by value, moved
    pub fn set_entity(&mut self, v: Entity) {
        self.entity = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_entity(&mut self) -> &mut Entity {
        if self.entity.is_none() {
            self.entity.set_default();
        }
        self.entity.as_mut().unwrap()
    }

    // Take field
    pub fn take_entity(&mut self) -> Entity {
        self.entity.take().unwrap_or_else(|| Entity::new())
    }
}

impl ::protobuf::Message for Update {
    fn is_initialized(&self) -> bool {
        for v in &self.entity {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.field_type, 1, &mut self.unknown_fields)?
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.entity)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.field_type != Update_Type::UNSPECIFIED {
            my_size += ::protobuf::rt::enum_size(1, self.field_type);
        }
        if let Some(ref v) = self.entity.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.field_type != Update_Type::UNSPECIFIED {
            os.write_enum(1, ::protobuf::ProtobufEnum::value(&self.field_type))?;
        }
        if let Some(ref v) = self.entity.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Update {
        Update::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<Update_Type>>(
                "type",
                |m: &Update| { &m.field_type },
                |m: &mut Update| { &mut m.field_type },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Entity>>(
                "entity",
                |m: &Update| { &m.entity },
                |m: &mut Update| { &mut m.entity },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Update>(
                "Update",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Update {
        static instance: ::protobuf::rt::LazyV2<Update> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Update::new)
    }
}

impl ::protobuf::Clear for Update {
    fn clear(&mut self) {
        self.field_type = Update_Type::UNSPECIFIED;
        self.entity.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Update {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Update {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum Update_Type {
    UNSPECIFIED = 0,
    INSERT = 1,
    MODIFY = 2,
    DELETE = 3,
}

impl ::protobuf::ProtobufEnum for Update_Type {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<Update_Type> {
        match value {
            0 => ::std::option::Option::Some(Update_Type::UNSPECIFIED),
            1 => ::std::option::Option::Some(Update_Type::INSERT),
            2 => ::std::option::Option::Some(Update_Type::MODIFY),
            3 => ::std::option::Option::Some(Update_Type::DELETE),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [Update_Type] = &[
            Update_Type::UNSPECIFIED,
            Update_Type::INSERT,
            Update_Type::MODIFY,
            Update_Type::DELETE,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<Update_Type>("Update.Type", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for Update_Type {
}

impl ::std::default::Default for Update_Type {
    fn default() -> Self {
        Update_Type::UNSPECIFIED
    }
}

impl ::protobuf::reflect::ProtobufValue for Update_Type {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Entity {
    // message oneof groups
    pub entity: ::std::option::Option<Entity_oneof_entity>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Entity {
    fn default() -> &'a Entity {
        <Entity as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum Entity_oneof_entity {
    table_entry(TableEntry),
    meter_entry(MeterEntry),
    counter_entry(CounterEntry),
    packet_replication_engine_entry(PacketReplicationEngineEntry),
    digest_entry(DigestEntry),
}

impl Entity {
    pub fn new() -> Entity {
        ::std::default::Default::default()
    }

    // .p4.v1.TableEntry table_entry = 2;


    pub fn get_table_entry(&self) -> &TableEntry {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_entry(ref v)) => v,
            _ => <TableEntry as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_table_entry(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_table_entry(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_entry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_table_entry(&mut self, v: TableEntry) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_entry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_table_entry(&mut self) -> &mut TableEntry {
        if let ::std::option::Option::Some(Entity_oneof_entity::table_entry(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_entry(TableEntry::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::table_entry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_table_entry(&mut self) -> TableEntry {
        if self.has_table_entry() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::table_entry(v)) => v,
                _ => panic!(),
            }
        } else {
            TableEntry::new()
        }
    }

    // .p4.v1.MeterEntry meter_entry = 5;


    pub fn get_meter_entry(&self) -> &MeterEntry {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::meter_entry(ref v)) => v,
            _ => <MeterEntry as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_meter_entry(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_meter_entry(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::meter_entry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_meter_entry(&mut self, v: MeterEntry) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::meter_entry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_meter_entry(&mut self) -> &mut MeterEntry {
        if let ::std::option::Option::Some(Entity_oneof_entity::meter_entry(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::meter_entry(MeterEntry::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::meter_entry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_meter_entry(&mut self) -> MeterEntry {
        if self.has_meter_entry() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::meter_entry(v)) => v,
                _ => panic!(),
            }
        } else {
            MeterEntry::new()
        }
    }

    // .p4.v1.CounterEntry counter_entry = 7;


    pub fn get_counter_entry(&self) -> &CounterEntry {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::counter_entry(ref v)) => v,
            _ => <CounterEntry as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_counter_entry(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_counter_entry(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::counter_entry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_counter_entry(&mut self, v: CounterEntry) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::counter_entry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_counter_entry(&mut self) -> &mut CounterEntry {
        if let ::std::option::Option::Some(Entity_oneof_entity::counter_entry(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::counter_entry(CounterEntry::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::counter_entry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_counter_entry(&mut self) -> CounterEntry {
        if self.has_counter_entry() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::counter_entry(v)) => v,
                _ => panic!(),
            }
        } else {
            CounterEntry::new()
        }
    }

    // .p4.v1.PacketReplicationEngineEntry packet_replication_engine_entry = 9;


    pub fn get_packet_replication_engine_entry(&self) -> &PacketReplicationEngineEntry {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::packet_replication_engine_entry(ref v)) => v,
            _ => <PacketReplicationEngineEntry as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_packet_replication_engine_entry(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_packet_replication_engine_entry(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::packet_replication_engine_entry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_packet_replication_engine_entry(&mut self, v: PacketReplicationEngineEntry) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::packet_replication_engine_entry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_packet_replication_engine_entry(&mut self) -> &mut PacketReplicationEngineEntry {
        if let ::std::option::Option::Some(Entity_oneof_entity::packet_replication_engine_entry(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::packet_replication_engine_entry(PacketReplicationEngineEntry::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::packet_replication_engine_entry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_packet_replication_engine_entry(&mut self) -> PacketReplicationEngineEntry {
        if self.has_packet_replication_engine_entry() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::packet_replication_engine_entry(v)) => v,
                _ => panic!(),
            }
        } else {
            PacketReplicationEngineEntry::new()
        }
    }

    // .p4.v1.DigestEntry digest_entry = 12;


    pub fn get_digest_entry(&self) -> &DigestEntry {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::digest_entry(ref v)) => v,
            _ => <DigestEntry as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_digest_entry(&mut self) {
        self.entity = ::std::option::Option::None;
    }

    pub fn has_digest_entry(&self) -> bool {
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::digest_entry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_digest_entry(&mut self, v: DigestEntry) {
        self.entity = ::std::option::Option::Some(Entity_oneof_entity::digest_entry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_digest_entry(&mut self) -> &mut DigestEntry {
        if let ::std::option::Option::Some(Entity_oneof_entity::digest_entry(_)) = self.entity {
        } else {
            self.entity = ::std::option::Option::Some(Entity_oneof_entity::digest_entry(DigestEntry::new()));
        }
        match self.entity {
            ::std::option::Option::Some(Entity_oneof_entity::digest_entry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_digest_entry(&mut self) -> DigestEntry {
        if self.has_digest_entry() {
            match self.entity.take() {
                ::std::option::Option::Some(Entity_oneof_entity::digest_entry(v)) => v,
                _ => panic!(),
            }
        } else {
            DigestEntry::new()
        }
    }
}

impl ::protobuf::Message for Entity {
    fn is_initialized(&self) -> bool {
        if let Some(Entity_oneof_entity::table_entry(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(Entity_oneof_entity::meter_entry(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(Entity_oneof_entity::counter_entry(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(Entity_oneof_entity::packet_replication_engine_entry(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(Entity_oneof_entity::digest_entry(ref v)) = self.entity {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::table_entry(is.read_message()?));
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::meter_entry(is.read_message()?));
                },
                7 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::counter_entry(is.read_message()?));
                },
                9 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::packet_replication_engine_entry(is.read_message()?));
                },
                12 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.entity = ::std::option::Option::Some(Entity_oneof_entity::digest_entry(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let ::std::option::Option::Some(ref v) = self.entity {
            match v {
                &Entity_oneof_entity::table_entry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &Entity_oneof_entity::meter_entry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &Entity_oneof_entity::counter_entry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &Entity_oneof_entity::packet_replication_engine_entry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &Entity_oneof_entity::digest_entry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let ::std::option::Option::Some(ref v) = self.entity {
            match v {
                &Entity_oneof_entity::table_entry(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &Entity_oneof_entity::meter_entry(ref v) => {
                    os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &Entity_oneof_entity::counter_entry(ref v) => {
                    os.write_tag(7, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &Entity_oneof_entity::packet_replication_engine_entry(ref v) => {
                    os.write_tag(9, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &Entity_oneof_entity::digest_entry(ref v) => {
                    os.write_tag(12, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Entity {
        Entity::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, TableEntry>(
                "table_entry",
                Entity::has_table_entry,
                Entity::get_table_entry,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, MeterEntry>(
                "meter_entry",
                Entity::has_meter_entry,
                Entity::get_meter_entry,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, CounterEntry>(
                "counter_entry",
                Entity::has_counter_entry,
                Entity::get_counter_entry,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, PacketReplicationEngineEntry>(
                "packet_replication_engine_entry",
                Entity::has_packet_replication_engine_entry,
                Entity::get_packet_replication_engine_entry,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, DigestEntry>(
                "digest_entry",
                Entity::has_digest_entry,
                Entity::get_digest_entry,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Entity>(
                "Entity",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Entity {
        static instance: ::protobuf::rt::LazyV2<Entity> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Entity::new)
    }
}

impl ::protobuf::Clear for Entity {
    fn clear(&mut self) {
        self.entity = ::std::option::Option::None;
        self.entity = ::std::option::Option::None;
        self.entity = ::std::option::Option::None;
        self.entity = ::std::option::Option::None;
        self.entity = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Entity {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableEntry {
    // message fields
    pub table_id: u32,
    pub field_match: ::protobuf::RepeatedField<FieldMatch>,
    pub action: ::protobuf::SingularPtrField<TableAction>,
    pub priority: i32,
    pub controller_metadata: u64,
    pub meter_config: ::protobuf::SingularPtrField<MeterConfig>,
    pub counter_data: ::protobuf::SingularPtrField<CounterData>,
    pub is_default_action: bool,
    pub idle_timeout_ns: i64,
    pub time_since_last_hit: ::protobuf::SingularPtrField<TableEntry_IdleTimeout>,
    pub metadata: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableEntry {
    fn default() -> &'a TableEntry {
        <TableEntry as ::protobuf::Message>::default_instance()
    }
}

impl TableEntry {
    pub fn new() -> TableEntry {
        ::std::default::Default::default()
    }

    // uint32 table_id = 1;


    pub fn get_table_id(&self) -> u32 {
        self.table_id
    }
    pub fn clear_table_id(&mut self) {
        self.table_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_table_id(&mut self, v: u32) {
        self.table_id = v;
    }

    // repeated .p4.v1.FieldMatch match = 2;


    pub fn get_field_match(&self) -> &[FieldMatch] {
        &self.field_match
    }
    pub fn clear_field_match(&mut self) {
        self.field_match.clear();
    }

    // Param is passed by value, moved
    pub fn set_field_match(&mut self, v: ::protobuf::RepeatedField<FieldMatch>) {
        self.field_match = v;
    }

    // Mutable pointer to the field.
    pub fn mut_field_match(&mut self) -> &mut ::protobuf::RepeatedField<FieldMatch> {
        &mut self.field_match
    }

    // Take field
    pub fn take_field_match(&mut self) -> ::protobuf::RepeatedField<FieldMatch> {
        ::std::mem::replace(&mut self.field_match, ::protobuf::RepeatedField::new())
    }

    // .p4.v1.TableAction action = 3;


    pub fn get_action(&self) -> &TableAction {
        self.action.as_ref().unwrap_or_else(|| <TableAction as ::protobuf::Message>::default_instance())
    }
    pub fn clear_action(&mut self) {
        self.action.clear();
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    // Param is passed by value, moved
    pub fn set_action(&mut self, v: TableAction) {
        self.action = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_action(&mut self) -> &mut TableAction {
        if self.action.is_none() {
            self.action.set_default();
        }
        self.action.as_mut().unwrap()
    }

    // Take field
    pub fn take_action(&mut self) -> TableAction {
        self.action.take().unwrap_or_else(|| TableAction::new())
    }

    // int32 priority = 4;


    pub fn get_priority(&self) -> i32 {
        self.priority
    }
    pub fn clear_priority(&mut self) {
        self.priority = 0;
    }

    // Param is passed by value, moved
    pub fn set_priority(&mut self, v: i32) {
        self.priority = v;
    }

    // uint64 controller_metadata = 5;


    pub fn get_controller_metadata(&self) -> u64 {
        self.controller_metadata
    }
    pub fn clear_controller_metadata(&mut self) {
        self.controller_metadata = 0;
    }

    // Param is passed by value, moved
    pub fn set_controller_metadata(&mut self, v: u64) {
        self.controller_metadata = v;
    }

    // .p4.v1.MeterConfig meter_config = 6;


    pub fn get_meter_config(&self) -> &MeterConfig {
        self.meter_config.as_ref().unwrap_or_else(|| <MeterConfig as ::protobuf::Message>::default_instance())
    }
    pub fn clear_meter_config(&mut self) {
        self.meter_config.clear();
    }

    pub fn has_meter_config(&self) -> bool {
        self.meter_config.is_some()
    }

    // Param is passed by value, moved
    pub fn set_meter_config(&mut self, v: MeterConfig) {
        self.meter_config = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_meter_config(&mut self) -> &mut MeterConfig {
        if self.meter_config.is_none() {
            self.meter_config.set_default();
        }
        self.meter_config.as_mut().unwrap()
    }

    // Take field
    pub fn take_meter_config(&mut self) -> MeterConfig {
        self.meter_config.take().unwrap_or_else(|| MeterConfig::new())
    }

    // .p4.v1.CounterData counter_data = 7;


    pub fn get_counter_data(&self) -> &CounterData {
        self.counter_data.as_ref().unwrap_or_else(|| <CounterData as ::protobuf::Message>::default_instance())
    }
    pub fn clear_counter_data(&mut self) {
        self.counter_data.clear();
    }

    pub fn has_counter_data(&self) -> bool {
        self.counter_data.is_some()
    }

    // Param is passed by value, moved
    pub fn set_counter_data(&mut self, v: CounterData) {
        self.counter_data = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_counter_data(&mut self) -> &mut CounterData {
        if self.counter_data.is_none() {
            self.counter_data.set_default();
        }
        self.counter_data.as_mut().unwrap()
    }

    // Take field
    pub fn take_counter_data(&mut self) -> CounterData {
        self.counter_data.take().unwrap_or_else(|| CounterData::new())
    }

    // bool is_default_action = 8;


    pub fn get_is_default_action(&self) -> bool {
        self.is_default_action
    }
    pub fn clear_is_default_action(&mut self) {
        self.is_default_action = false;
    }

    // Param is passed by value, moved
    pub fn set_is_default_action(&mut self, v: bool) {
        self.is_default_action = v;
    }

    // int64 idle_timeout_ns = 9;


    pub fn get_idle_timeout_ns(&self) -> i64 {
        self.idle_timeout_ns
    }
    pub fn clear_idle_timeout_ns(&mut self) {
        self.idle_timeout_ns = 0;
    }

    // Param is passed by value, moved
    pub fn set_idle_timeout_ns(&mut self, v: i64) {
        self.idle_timeout_ns = v;
    }

    // .p4.v1.TableEntry.IdleTimeout time_since_last_hit = 10;


    pub fn get_time_since_last_hit(&self) -> &TableEntry_IdleTimeout {
        self.time_since_last_hit.as_ref().unwrap_or_else(|| <TableEntry_IdleTimeout as ::protobuf::Message>::default_instance())
    }
    pub fn clear_time_since_last_hit(&mut self) {
        self.time_since_last_hit.clear();
    }

    pub fn has_time_since_last_hit(&self) -> bool {
        self.time_since_last_hit.is_some()
    }

    // Param is passed by value, moved
    pub fn set_time_since_last_hit(&mut self, v: TableEntry_IdleTimeout) {
        self.time_since_last_hit = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_time_since_last_hit(&mut self) -> &mut TableEntry_IdleTimeout {
        if self.time_since_last_hit.is_none() {
            self.time_since_last_hit.set_default();
        }
        self.time_since_last_hit.as_mut().unwrap()
    }

    // Take field
    pub fn take_time_since_last_hit(&mut self) -> TableEntry_IdleTimeout {
        self.time_since_last_hit.take().unwrap_or_else(|| TableEntry_IdleTimeout::new())
    }

    // bytes metadata = 11;


    pub fn get_metadata(&self) -> &[u8] {
        &self.metadata
    }
    pub fn clear_metadata(&mut self) {
        self.metadata.clear();
    }

    // Param is passed by value, moved
    pub fn set_metadata(&mut self, v: ::std::vec::Vec<u8>) {
        self.metadata = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_metadata(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.metadata
    }

    // Take field
    pub fn take_metadata(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.metadata, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for TableEntry {
    fn is_initialized(&self) -> bool {
        for v in &self.field_match {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.action {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.meter_config {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.counter_data {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.time_since_last_hit {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.table_id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.field_match)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.action)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.priority = tmp;
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint64()?;
                    self.controller_metadata = tmp;
                },
                6 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.meter_config)?;
                },
                7 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.counter_data)?;
                },
                8 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.is_default_action = tmp;
                },
                9 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.idle_timeout_ns = tmp;
                },
                10 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.time_since_last_hit)?;
                },
                11 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.metadata)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.table_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.table_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.field_match {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        if let Some(ref v) = self.action.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.priority != 0 {
            my_size += ::protobuf::rt::value_size(4, self.priority, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.controller_metadata != 0 {
            my_size += ::protobuf::rt::value_size(5, self.controller_metadata, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.meter_config.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.counter_data.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.is_default_action != false {
            my_size += 2;
        }
        if self.idle_timeout_ns != 0 {
            my_size += ::protobuf::rt::value_size(9, self.idle_timeout_ns, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.time_since_last_hit.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if !self.metadata.is_empty() {
            my_size += ::protobuf::rt::bytes_size(11, &self.metadata);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.table_id != 0 {
            os.write_uint32(1, self.table_id)?;
        }
        for v in &self.field_match {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        if let Some(ref v) = self.action.as_ref() {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.priority != 0 {
            os.write_int32(4, self.priority)?;
        }
        if self.controller_metadata != 0 {
            os.write_uint64(5, self.controller_metadata)?;
        }
        if let Some(ref v) = self.meter_config.as_ref() {
            os.write_tag(6, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.counter_data.as_ref() {
            os.write_tag(7, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.is_default_action != false {
            os.write_bool(8, self.is_default_action)?;
        }
        if self.idle_timeout_ns != 0 {
            os.write_int64(9, self.idle_timeout_ns)?;
        }
        if let Some(ref v) = self.time_since_last_hit.as_ref() {
            os.write_tag(10, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if !self.metadata.is_empty() {
            os.write_bytes(11, &self.metadata)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableEntry {
        TableEntry::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "table_id",
                |m: &TableEntry| { &m.table_id },
                |m: &mut TableEntry| { &mut m.table_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<FieldMatch>>(
                "match",
                |m: &TableEntry| { &m.field_match },
                |m: &mut TableEntry| { &mut m.field_match },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TableAction>>(
                "action",
                |m: &TableEntry| { &m.action },
                |m: &mut TableEntry| { &mut m.action },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "priority",
                |m: &TableEntry| { &m.priority },
                |m: &mut TableEntry| { &mut m.priority },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint64>(
                "controller_metadata",
                |m: &TableEntry| { &m.controller_metadata },
                |m: &mut TableEntry| { &mut m.controller_metadata },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<MeterConfig>>(
                "meter_config",
                |m: &TableEntry| { &m.meter_config },
                |m: &mut TableEntry| { &mut m.meter_config },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<CounterData>>(
                "counter_data",
                |m: &TableEntry| { &m.counter_data },
                |m: &mut TableEntry| { &mut m.counter_data },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "is_default_action",
                |m: &TableEntry| { &m.is_default_action },
                |m: &mut TableEntry| { &mut m.is_default_action },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "idle_timeout_ns",
                |m: &TableEntry| { &m.idle_timeout_ns },
                |m: &mut TableEntry| { &mut m.idle_timeout_ns },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<TableEntry_IdleTimeout>>(
                "time_since_last_hit",
                |m: &TableEntry| { &m.time_since_last_hit },
                |m: &mut TableEntry| { &mut m.time_since_last_hit },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "metadata",
                |m: &TableEntry| { &m.metadata },
                |m: &mut TableEntry| { &mut m.metadata },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableEntry>(
                "TableEntry",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableEntry {
        static instance: ::protobuf::rt::LazyV2<TableEntry> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableEntry::new)
    }
}

impl ::protobuf::Clear for TableEntry {
    fn clear(&mut self) {
        self.table_id = 0;
        self.field_match.clear();
        self.action.clear();
        self.priority = 0;
        self.controller_metadata = 0;
        self.meter_config.clear();
        self.counter_data.clear();
        self.is_default_action = false;
        self.idle_timeout_ns = 0;
        self.time_since_last_hit.clear();
        self.metadata.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableEntry {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableEntry_IdleTimeout {
    // message fields
    pub elapsed_ns: i64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableEntry_IdleTimeout {
    fn default() -> &'a TableEntry_IdleTimeout {
        <TableEntry_IdleTimeout as ::protobuf::Message>::default_instance()
    }
}

impl TableEntry_IdleTimeout {
    pub fn new() -> TableEntry_IdleTimeout {
        ::std::default::Default::default()
    }

    // int64 elapsed_ns = 1;


    pub fn get_elapsed_ns(&self) -> i64 {
        self.elapsed_ns
    }
    pub fn clear_elapsed_ns(&mut self) {
        self.elapsed_ns = 0;
    }

    // Param is passed by value, moved
    pub fn set_elapsed_ns(&mut self, v: i64) {
        self.elapsed_ns = v;
    }
}

impl ::protobuf::Message for TableEntry_IdleTimeout {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.elapsed_ns = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.elapsed_ns != 0 {
            my_size += ::protobuf::rt::value_size(1, self.elapsed_ns, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.elapsed_ns != 0 {
            os.write_int64(1, self.elapsed_ns)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableEntry_IdleTimeout {
        TableEntry_IdleTimeout::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "elapsed_ns",
                |m: &TableEntry_IdleTimeout| { &m.elapsed_ns },
                |m: &mut TableEntry_IdleTimeout| { &mut m.elapsed_ns },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableEntry_IdleTimeout>(
                "TableEntry.IdleTimeout",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableEntry_IdleTimeout {
        static instance: ::protobuf::rt::LazyV2<TableEntry_IdleTimeout> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableEntry_IdleTimeout::new)
    }
}

impl ::protobuf::Clear for TableEntry_IdleTimeout {
    fn clear(&mut self) {
        self.elapsed_ns = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableEntry_IdleTimeout {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableEntry_IdleTimeout {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct FieldMatch {
    // message fields
    pub field_id: u32,
    // message oneof groups
    pub field_match_type: ::std::option::Option<FieldMatch_oneof_field_match_type>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a FieldMatch {
    fn default() -> &'a FieldMatch {
        <FieldMatch as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum FieldMatch_oneof_field_match_type {
    exact(FieldMatch_Exact),
    ternary(FieldMatch_Ternary),
    lpm(FieldMatch_LPM),
    range(FieldMatch_Range),
    optional(FieldMatch_Optional),
    other(::protobuf::well_known_types::Any),
}

impl FieldMatch {
    pub fn new() -> FieldMatch {
        ::std::default::Default::default()
    }

    // uint32 field_id = 1;


    pub fn get_field_id(&self) -> u32 {
        self.field_id
    }
    pub fn clear_field_id(&mut self) {
        self.field_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_field_id(&mut self, v: u32) {
        self.field_id = v;
    }

    // .p4.v1.FieldMatch.Exact exact = 2;


    pub fn get_exact(&self) -> &FieldMatch_Exact {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::exact(ref v)) => v,
            _ => <FieldMatch_Exact as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_exact(&mut self) {
        self.field_match_type = ::std::option::Option::None;
    }

    pub fn has_exact(&self) -> bool {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::exact(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_exact(&mut self, v: FieldMatch_Exact) {
        self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::exact(v))
    }

    // Mutable pointer to the field.
    pub fn mut_exact(&mut self) -> &mut FieldMatch_Exact {
        if let ::std::option::Option::Some(FieldMatch_oneof_field_match_type::exact(_)) = self.field_match_type {
        } else {
            self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::exact(FieldMatch_Exact::new()));
        }
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::exact(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_exact(&mut self) -> FieldMatch_Exact {
        if self.has_exact() {
            match self.field_match_type.take() {
                ::std::option::Option::Some(FieldMatch_oneof_field_match_type::exact(v)) => v,
                _ => panic!(),
            }
        } else {
            FieldMatch_Exact::new()
        }
    }

    // .p4.v1.FieldMatch.Ternary ternary = 3;


    pub fn get_ternary(&self) -> &FieldMatch_Ternary {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::ternary(ref v)) => v,
            _ => <FieldMatch_Ternary as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_ternary(&mut self) {
        self.field_match_type = ::std::option::Option::None;
    }

    pub fn has_ternary(&self) -> bool {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::ternary(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_ternary(&mut self, v: FieldMatch_Ternary) {
        self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::ternary(v))
    }

    // Mutable pointer to the field.
    pub fn mut_ternary(&mut self) -> &mut FieldMatch_Ternary {
        if let ::std::option::Option::Some(FieldMatch_oneof_field_match_type::ternary(_)) = self.field_match_type {
        } else {
            self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::ternary(FieldMatch_Ternary::new()));
        }
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::ternary(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_ternary(&mut self) -> FieldMatch_Ternary {
        if self.has_ternary() {
            match self.field_match_type.take() {
                ::std::option::Option::Some(FieldMatch_oneof_field_match_type::ternary(v)) => v,
                _ => panic!(),
            }
        } else {
            FieldMatch_Ternary::new()
        }
    }

    // .p4.v1.FieldMatch.LPM lpm = 4;


    pub fn get_lpm(&self) -> &FieldMatch_LPM {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::lpm(ref v)) => v,
            _ => <FieldMatch_LPM as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_lpm(&mut self) {
        self.field_match_type = ::std::option::Option::None;
    }

    pub fn has_lpm(&self) -> bool {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::lpm(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_lpm(&mut self, v: FieldMatch_LPM) {
        self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::lpm(v))
    }

    // Mutable pointer to the field.
    pub fn mut_lpm(&mut self) -> &mut FieldMatch_LPM {
        if let ::std::option::Option::Some(FieldMatch_oneof_field_match_type::lpm(_)) = self.field_match_type {
        } else {
            self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::lpm(FieldMatch_LPM::new()));
        }
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::lpm(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_lpm(&mut self) -> FieldMatch_LPM {
        if self.has_lpm() {
            match self.field_match_type.take() {
                ::std::option::Option::Some(FieldMatch_oneof_field_match_type::lpm(v)) => v,
                _ => panic!(),
            }
        } else {
            FieldMatch_LPM::new()
        }
    }

    // .p4.v1.FieldMatch.Range range = 6;


    pub fn get_range(&self) -> &FieldMatch_Range {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::range(ref v)) => v,
            _ => <FieldMatch_Range as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_range(&mut self) {
        self.field_match_type = ::std::option::Option::None;
    }

    pub fn has_range(&self) -> bool {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::range(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_range(&mut self, v: FieldMatch_Range) {
        self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::range(v))
    }

    // Mutable pointer to the field.
    pub fn mut_range(&mut self) -> &mut FieldMatch_Range {
        if let ::std::option::Option::Some(FieldMatch_oneof_field_match_type::range(_)) = self.field_match_type {
        } else {
            self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::range(FieldMatch_Range::new()));
        }
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::range(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_range(&mut self) -> FieldMatch_Range {
        if self.has_range() {
            match self.field_match_type.take() {
                ::std::option::Option::Some(FieldMatch_oneof_field_match_type::range(v)) => v,
                _ => panic!(),
            }
        } else {
            FieldMatch_Range::new()
        }
    }

    // .p4.v1.FieldMatch.Optional optional = 7;


    pub fn get_optional(&self) -> &FieldMatch_Optional {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::optional(ref v)) => v,
            _ => <FieldMatch_Optional as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_optional(&mut self) {
        self.field_match_type = ::std::option::Option::None;
    }

    pub fn has_optional(&self) -> bool {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::optional(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_optional(&mut self, v: FieldMatch_Optional) {
        self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::optional(v))
    }

    // Mutable pointer to the field.
    pub fn mut_optional(&mut self) -> &mut FieldMatch_Optional {
        if let ::std::option::Option::Some(FieldMatch_oneof_field_match_type::optional(_)) = self.field_match_type {
        } else {
            self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::optional(FieldMatch_Optional::new()));
        }
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::optional(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_optional(&mut self) -> FieldMatch_Optional {
        if self.has_optional() {
            match self.field_match_type.take() {
                ::std::option::Option::Some(FieldMatch_oneof_field_match_type::optional(v)) => v,
                _ => panic!(),
            }
        } else {
            FieldMatch_Optional::new()
        }
    }

    // .google.protobuf.Any other = 100;


    pub fn get_other(&self) -> &::protobuf::well_known_types::Any {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::other(ref v)) => v,
            _ => <::protobuf::well_known_types::Any as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_other(&mut self) {
        self.field_match_type = ::std::option::Option::None;
    }

    pub fn has_other(&self) -> bool {
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::other(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_other(&mut self, v: ::protobuf::well_known_types::Any) {
        self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::other(v))
    }

    // Mutable pointer to the field.
    pub fn mut_other(&mut self) -> &mut ::protobuf::well_known_types::Any {
        if let ::std::option::Option::Some(FieldMatch_oneof_field_match_type::other(_)) = self.field_match_type {
        } else {
            self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::other(::protobuf::well_known_types::Any::new()));
        }
        match self.field_match_type {
            ::std::option::Option::Some(FieldMatch_oneof_field_match_type::other(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_other(&mut self) -> ::protobuf::well_known_types::Any {
        if self.has_other() {
            match self.field_match_type.take() {
                ::std::option::Option::Some(FieldMatch_oneof_field_match_type::other(v)) => v,
                _ => panic!(),
            }
        } else {
            ::protobuf::well_known_types::Any::new()
        }
    }
}

impl ::protobuf::Message for FieldMatch {
    fn is_initialized(&self) -> bool {
        if let Some(FieldMatch_oneof_field_match_type::exact(ref v)) = self.field_match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(FieldMatch_oneof_field_match_type::ternary(ref v)) = self.field_match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(FieldMatch_oneof_field_match_type::lpm(ref v)) = self.field_match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(FieldMatch_oneof_field_match_type::range(ref v)) = self.field_match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(FieldMatch_oneof_field_match_type::optional(ref v)) = self.field_match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(FieldMatch_oneof_field_match_type::other(ref v)) = self.field_match_type {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.field_id = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::exact(is.read_message()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::ternary(is.read_message()?));
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::lpm(is.read_message()?));
                },
                6 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::range(is.read_message()?));
                },
                7 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::optional(is.read_message()?));
                },
                100 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match_type = ::std::option::Option::Some(FieldMatch_oneof_field_match_type::other(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.field_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.field_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.field_match_type {
            match v {
                &FieldMatch_oneof_field_match_type::exact(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &FieldMatch_oneof_field_match_type::ternary(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &FieldMatch_oneof_field_match_type::lpm(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &FieldMatch_oneof_field_match_type::range(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &FieldMatch_oneof_field_match_type::optional(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &FieldMatch_oneof_field_match_type::other(ref v) => {
                    let len = v.compute_size();
                    my_size += 2 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.field_id != 0 {
            os.write_uint32(1, self.field_id)?;
        }
        if let ::std::option::Option::Some(ref v) = self.field_match_type {
            match v {
                &FieldMatch_oneof_field_match_type::exact(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &FieldMatch_oneof_field_match_type::ternary(ref v) => {
                    os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &FieldMatch_oneof_field_match_type::lpm(ref v) => {
                    os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &FieldMatch_oneof_field_match_type::range(ref v) => {
                    os.write_tag(6, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &FieldMatch_oneof_field_match_type::optional(ref v) => {
                    os.write_tag(7, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &FieldMatch_oneof_field_match_type::other(ref v) => {
                    os.write_tag(100, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> FieldMatch {
        FieldMatch::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "field_id",
                |m: &FieldMatch| { &m.field_id },
                |m: &mut FieldMatch| { &mut m.field_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, FieldMatch_Exact>(
                "exact",
                FieldMatch::has_exact,
                FieldMatch::get_exact,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, FieldMatch_Ternary>(
                "ternary",
                FieldMatch::has_ternary,
                FieldMatch::get_ternary,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, FieldMatch_LPM>(
                "lpm",
                FieldMatch::has_lpm,
                FieldMatch::get_lpm,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, FieldMatch_Range>(
                "range",
                FieldMatch::has_range,
                FieldMatch::get_range,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, FieldMatch_Optional>(
                "optional",
                FieldMatch::has_optional,
                FieldMatch::get_optional,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, ::protobuf::well_known_types::Any>(
                "other",
                FieldMatch::has_other,
                FieldMatch::get_other,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<FieldMatch>(
                "FieldMatch",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static FieldMatch {
        static instance: ::protobuf::rt::LazyV2<FieldMatch> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FieldMatch::new)
    }
}

impl ::protobuf::Clear for FieldMatch {
    fn clear(&mut self) {
        self.field_id = 0;
        self.field_match_type = ::std::option::Option::None;
        self.field_match_type = ::std::option::Option::None;
        self.field_match_type = ::std::option::Option::None;
        self.field_match_type = ::std::option::Option::None;
        self.field_match_type = ::std::option::Option::None;
        self.field_match_type = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for FieldMatch {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for FieldMatch {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct FieldMatch_Exact {
    // message fields
    pub value: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a FieldMatch_Exact {
    fn default() -> &'a FieldMatch_Exact {
        <FieldMatch_Exact as ::protobuf::Message>::default_instance()
    }
}

impl FieldMatch_Exact {
    pub fn new() -> FieldMatch_Exact {
        ::std::default::Default::default()
    }

    // bytes value = 1;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for FieldMatch_Exact {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.value);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.value.is_empty() {
            os.write_bytes(1, &self.value)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> FieldMatch_Exact {
        FieldMatch_Exact::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &FieldMatch_Exact| { &m.value },
                |m: &mut FieldMatch_Exact| { &mut m.value },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<FieldMatch_Exact>(
                "FieldMatch.Exact",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static FieldMatch_Exact {
        static instance: ::protobuf::rt::LazyV2<FieldMatch_Exact> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FieldMatch_Exact::new)
    }
}

impl ::protobuf::Clear for FieldMatch_Exact {
    fn clear(&mut self) {
        self.value.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for FieldMatch_Exact {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for FieldMatch_Exact {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct FieldMatch_Ternary {
    // message fields
    pub value: ::std::vec::Vec<u8>,
    pub mask: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a FieldMatch_Ternary {
    fn default() -> &'a FieldMatch_Ternary {
        <FieldMatch_Ternary as ::protobuf::Message>::default_instance()
    }
}

impl FieldMatch_Ternary {
    pub fn new() -> FieldMatch_Ternary {
        ::std::default::Default::default()
    }

    // bytes value = 1;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }

    // bytes mask = 2;


    pub fn get_mask(&self) -> &[u8] {
        &self.mask
    }
    pub fn clear_mask(&mut self) {
        self.mask.clear();
    }

    // Param is passed by value, moved
    pub fn set_mask(&mut self, v: ::std::vec::Vec<u8>) {
        self.mask = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_mask(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.mask
    }

    // Take field
    pub fn take_mask(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.mask, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for FieldMatch_Ternary {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.mask)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.value);
        }
        if !self.mask.is_empty() {
            my_size += ::protobuf::rt::bytes_size(2, &self.mask);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.value.is_empty() {
            os.write_bytes(1, &self.value)?;
        }
        if !self.mask.is_empty() {
            os.write_bytes(2, &self.mask)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> FieldMatch_Ternary {
        FieldMatch_Ternary::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &FieldMatch_Ternary| { &m.value },
                |m: &mut FieldMatch_Ternary| { &mut m.value },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "mask",
                |m: &FieldMatch_Ternary| { &m.mask },
                |m: &mut FieldMatch_Ternary| { &mut m.mask },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<FieldMatch_Ternary>(
                "FieldMatch.Ternary",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static FieldMatch_Ternary {
        static instance: ::protobuf::rt::LazyV2<FieldMatch_Ternary> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FieldMatch_Ternary::new)
    }
}

impl ::protobuf::Clear for FieldMatch_Ternary {
    fn clear(&mut self) {
        self.value.clear();
        self.mask.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for FieldMatch_Ternary {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for FieldMatch_Ternary {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct FieldMatch_LPM {
    // message fields
    pub value: ::std::vec::Vec<u8>,
    pub prefix_len: i32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a FieldMatch_LPM {
    fn default() -> &'a FieldMatch_LPM {
        <FieldMatch_LPM as ::protobuf::Message>::default_instance()
    }
}

impl FieldMatch_LPM {
    pub fn new() -> FieldMatch_LPM {
        ::std::default::Default::default()
    }

    // bytes value = 1;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }

    // int32 prefix_len = 2;


    pub fn get_prefix_len(&self) -> i32 {
        self.prefix_len
    }
    pub fn clear_prefix_len(&mut self) {
        self.prefix_len = 0;
    }

    // Param is passed by value, moved
    pub fn set_prefix_len(&mut self, v: i32) {
        self.prefix_len = v;
    }
}

impl ::protobuf::Message for FieldMatch_LPM {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.prefix_len = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.value);
        }
        if self.prefix_len != 0 {
            my_size += ::protobuf::rt::value_size(2, self.prefix_len, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.value.is_empty() {
            os.write_bytes(1, &self.value)?;
        }
        if self.prefix_len != 0 {
            os.write_int32(2, self.prefix_len)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> FieldMatch_LPM {
        FieldMatch_LPM::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &FieldMatch_LPM| { &m.value },
                |m: &mut FieldMatch_LPM| { &mut m.value },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "prefix_len",
                |m: &FieldMatch_LPM| { &m.prefix_len },
                |m: &mut FieldMatch_LPM| { &mut m.prefix_len },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<FieldMatch_LPM>(
                "FieldMatch.LPM",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static FieldMatch_LPM {
        static instance: ::protobuf::rt::LazyV2<FieldMatch_LPM> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FieldMatch_LPM::new)
    }
}

impl ::protobuf::Clear for FieldMatch_LPM {
    fn clear(&mut self) {
        self.value.clear();
        self.prefix_len = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for FieldMatch_LPM {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for FieldMatch_LPM {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct FieldMatch_Range {
    // message fields
    pub low: ::std::vec::Vec<u8>,
    pub high: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a FieldMatch_Range {
    fn default() -> &'a FieldMatch_Range {
        <FieldMatch_Range as ::protobuf::Message>::default_instance()
    }
}

impl FieldMatch_Range {
    pub fn new() -> FieldMatch_Range {
        ::std::default::Default::default()
    }

    // bytes low = 1;


    pub fn get_low(&self) -> &[u8] {
        &self.low
    }
    pub fn clear_low(&mut self) {
        self.low.clear();
    }

    // Param is passed by value, moved
    pub fn set_low(&mut self, v: ::std::vec::Vec<u8>) {
        self.low = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_low(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.low
    }

    // Take field
    pub fn take_low(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.low, ::std::vec::Vec::new())
    }

    // bytes high = 2;


    pub fn get_high(&self) -> &[u8] {
        &self.high
    }
    pub fn clear_high(&mut self) {
        self.high.clear();
    }

    // Param is passed by value, moved
    pub fn set_high(&mut self, v: ::std::vec::Vec<u8>) {
        self.high = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_high(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.high
    }

    // Take field
    pub fn take_high(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.high, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for FieldMatch_Range {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.low)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.high)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.low.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.low);
        }
        if !self.high.is_empty() {
            my_size += ::protobuf::rt::bytes_size(2, &self.high);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.low.is_empty() {
            os.write_bytes(1, &self.low)?;
        }
        if !self.high.is_empty() {
            os.write_bytes(2, &self.high)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> FieldMatch_Range {
        FieldMatch_Range::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "low",
                |m: &FieldMatch_Range| { &m.low },
                |m: &mut FieldMatch_Range| { &mut m.low },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "high",
                |m: &FieldMatch_Range| { &m.high },
                |m: &mut FieldMatch_Range| { &mut m.high },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<FieldMatch_Range>(
                "FieldMatch.Range",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static FieldMatch_Range {
        static instance: ::protobuf::rt::LazyV2<FieldMatch_Range> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FieldMatch_Range::new)
    }
}

impl ::protobuf::Clear for FieldMatch_Range {
    fn clear(&mut self) {
        self.low.clear();
        self.high.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for FieldMatch_Range {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for FieldMatch_Range {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct FieldMatch_Optional {
    // message fields
    pub value: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a FieldMatch_Optional {
    fn default() -> &'a FieldMatch_Optional {
        <FieldMatch_Optional as ::protobuf::Message>::default_instance()
    }
}

impl FieldMatch_Optional {
    pub fn new() -> FieldMatch_Optional {
        ::std::default::Default::default()
    }

    // bytes value = 1;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for FieldMatch_Optional {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.value);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.value.is_empty() {
            os.write_bytes(1, &self.value)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> FieldMatch_Optional {
        FieldMatch_Optional::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &FieldMatch_Optional| { &m.value },
                |m: &mut FieldMatch_Optional| { &mut m.value },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<FieldMatch_Optional>(
                "FieldMatch.Optional",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static FieldMatch_Optional {
        static instance: ::protobuf::rt::LazyV2<FieldMatch_Optional> = ::protobuf::rt::LazyV2::INIT;
        instance.get(FieldMatch_Optional::new)
    }
}

impl ::protobuf::Clear for FieldMatch_Optional {
    fn clear(&mut self) {
        self.value.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for FieldMatch_Optional {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for FieldMatch_Optional {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct TableAction {
    // message oneof groups
    pub field_type: ::std::option::Option<TableAction_oneof_type>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a TableAction {
    fn default() -> &'a TableAction {
        <TableAction as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum TableAction_oneof_type {
    action(Action),
    action_profile_member_id(u32),
    action_profile_group_id(u32),
    action_profile_action_set(ActionProfileActionSet),
}

impl TableAction {
    pub fn new() -> TableAction {
        ::std::default::Default::default()
    }

    // .p4.v1.Action action = 1;


    pub fn get_action(&self) -> &Action {
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action(ref v)) => v,
            _ => <Action as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_action(&mut self) {
        self.field_type = ::std::option::Option::None;
    }

    pub fn has_action(&self) -> bool {
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_action(&mut self, v: Action) {
        self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action(v))
    }

    // Mutable pointer to the field.
    pub fn mut_action(&mut self) -> &mut Action {
        if let ::std::option::Option::Some(TableAction_oneof_type::action(_)) = self.field_type {
        } else {
            self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action(Action::new()));
        }
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_action(&mut self) -> Action {
        if self.has_action() {
            match self.field_type.take() {
                ::std::option::Option::Some(TableAction_oneof_type::action(v)) => v,
                _ => panic!(),
            }
        } else {
            Action::new()
        }
    }

    // uint32 action_profile_member_id = 2;


    pub fn get_action_profile_member_id(&self) -> u32 {
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action_profile_member_id(v)) => v,
            _ => 0,
        }
    }
    pub fn clear_action_profile_member_id(&mut self) {
        self.field_type = ::std::option::Option::None;
    }

    pub fn has_action_profile_member_id(&self) -> bool {
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action_profile_member_id(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_action_profile_member_id(&mut self, v: u32) {
        self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action_profile_member_id(v))
    }

    // uint32 action_profile_group_id = 3;


    pub fn get_action_profile_group_id(&self) -> u32 {
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action_profile_group_id(v)) => v,
            _ => 0,
        }
    }
    pub fn clear_action_profile_group_id(&mut self) {
        self.field_type = ::std::option::Option::None;
    }

    pub fn has_action_profile_group_id(&self) -> bool {
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action_profile_group_id(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_action_profile_group_id(&mut self, v: u32) {
        self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action_profile_group_id(v))
    }

    // .p4.v1.ActionProfileActionSet action_profile_action_set = 4;


    pub fn get_action_profile_action_set(&self) -> &ActionProfileActionSet {
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action_profile_action_set(ref v)) => v,
            _ => <ActionProfileActionSet as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_action_profile_action_set(&mut self) {
        self.field_type = ::std::option::Option::None;
    }

    pub fn has_action_profile_action_set(&self) -> bool {
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action_profile_action_set(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_action_profile_action_set(&mut self, v: ActionProfileActionSet) {
        self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action_profile_action_set(v))
    }

    // Mutable pointer to the field.
    pub fn mut_action_profile_action_set(&mut self) -> &mut ActionProfileActionSet {
        if let ::std::option::Option::Some(TableAction_oneof_type::action_profile_action_set(_)) = self.field_type {
        } else {
            self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action_profile_action_set(ActionProfileActionSet::new()));
        }
        match self.field_type {
            ::std::option::Option::Some(TableAction_oneof_type::action_profile_action_set(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_action_profile_action_set(&mut self) -> ActionProfileActionSet {
        if self.has_action_profile_action_set() {
            match self.field_type.take() {
                ::std::option::Option::Some(TableAction_oneof_type::action_profile_action_set(v)) => v,
                _ => panic!(),
            }
        } else {
            ActionProfileActionSet::new()
        }
    }
}

impl ::protobuf::Message for TableAction {
    fn is_initialized(&self) -> bool {
        if let Some(TableAction_oneof_type::action(ref v)) = self.field_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(TableAction_oneof_type::action_profile_action_set(ref v)) = self.field_type {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action(is.read_message()?));
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action_profile_member_id(is.read_uint32()?));
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action_profile_group_id(is.read_uint32()?));
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_type = ::std::option::Option::Some(TableAction_oneof_type::action_profile_action_set(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let ::std::option::Option::Some(ref v) = self.field_type {
            match v {
                &TableAction_oneof_type::action(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &TableAction_oneof_type::action_profile_member_id(v) => {
                    my_size += ::protobuf::rt::value_size(2, v, ::protobuf::wire_format::WireTypeVarint);
                },
                &TableAction_oneof_type::action_profile_group_id(v) => {
                    my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint);
                },
                &TableAction_oneof_type::action_profile_action_set(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let ::std::option::Option::Some(ref v) = self.field_type {
            match v {
                &TableAction_oneof_type::action(ref v) => {
                    os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &TableAction_oneof_type::action_profile_member_id(v) => {
                    os.write_uint32(2, v)?;
                },
                &TableAction_oneof_type::action_profile_group_id(v) => {
                    os.write_uint32(3, v)?;
                },
                &TableAction_oneof_type::action_profile_action_set(ref v) => {
                    os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> TableAction {
        TableAction::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, Action>(
                "action",
                TableAction::has_action,
                TableAction::get_action,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_u32_accessor::<_>(
                "action_profile_member_id",
                TableAction::has_action_profile_member_id,
                TableAction::get_action_profile_member_id,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_u32_accessor::<_>(
                "action_profile_group_id",
                TableAction::has_action_profile_group_id,
                TableAction::get_action_profile_group_id,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, ActionProfileActionSet>(
                "action_profile_action_set",
                TableAction::has_action_profile_action_set,
                TableAction::get_action_profile_action_set,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<TableAction>(
                "TableAction",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static TableAction {
        static instance: ::protobuf::rt::LazyV2<TableAction> = ::protobuf::rt::LazyV2::INIT;
        instance.get(TableAction::new)
    }
}

impl ::protobuf::Clear for TableAction {
    fn clear(&mut self) {
        self.field_type = ::std::option::Option::None;
        self.field_type = ::std::option::Option::None;
        self.field_type = ::std::option::Option::None;
        self.field_type = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for TableAction {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TableAction {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Action {
    // message fields
    pub action_id: u32,
    pub params: ::protobuf::RepeatedField<Action_Param>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Action {
    fn default() -> &'a Action {
        <Action as ::protobuf::Message>::default_instance()
    }
}

impl Action {
    pub fn new() -> Action {
        ::std::default::Default::default()
    }

    // uint32 action_id = 1;


    pub fn get_action_id(&self) -> u32 {
        self.action_id
    }
    pub fn clear_action_id(&mut self) {
        self.action_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_action_id(&mut self, v: u32) {
        self.action_id = v;
    }

    // repeated .p4.v1.Action.Param params = 4;


    pub fn get_params(&self) -> &[Action_Param] {
        &self.params
    }
    pub fn clear_params(&mut self) {
        self.params.clear();
    }

    // Param is passed by value, moved
    pub fn set_params(&mut self, v: ::protobuf::RepeatedField<Action_Param>) {
        self.params = v;
    }

    // Mutable pointer to the field.
    pub fn mut_params(&mut self) -> &mut ::protobuf::RepeatedField<Action_Param> {
        &mut self.params
    }

    // Take field
    pub fn take_params(&mut self) -> ::protobuf::RepeatedField<Action_Param> {
        ::std::mem::replace(&mut self.params, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for Action {
    fn is_initialized(&self) -> bool {
        for v in &self.params {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.action_id = tmp;
                },
                4 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.params)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.action_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.action_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.params {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.action_id != 0 {
            os.write_uint32(1, self.action_id)?;
        }
        for v in &self.params {
            os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Action {
        Action::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "action_id",
                |m: &Action| { &m.action_id },
                |m: &mut Action| { &mut m.action_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Action_Param>>(
                "params",
                |m: &Action| { &m.params },
                |m: &mut Action| { &mut m.params },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Action>(
                "Action",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Action {
        static instance: ::protobuf::rt::LazyV2<Action> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Action::new)
    }
}

impl ::protobuf::Clear for Action {
    fn clear(&mut self) {
        self.action_id = 0;
        self.params.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Action {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Action {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Action_Param {
    // message fields
    pub param_id: u32,
    pub value: ::std::vec::Vec<u8>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Action_Param {
    fn default() -> &'a Action_Param {
        <Action_Param as ::protobuf::Message>::default_instance()
    }
}

impl Action_Param {
    pub fn new() -> Action_Param {
        ::std::default::Default::default()
    }

    // uint32 param_id = 2;


    pub fn get_param_id(&self) -> u32 {
        self.param_id
    }
    pub fn clear_param_id(&mut self) {
        self.param_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_param_id(&mut self, v: u32) {
        self.param_id = v;
    }

    // bytes value = 3;


    pub fn get_value(&self) -> &[u8] {
        &self.value
    }
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    // Param is passed by value, moved
    pub fn set_value(&mut self, v: ::std::vec::Vec<u8>) {
        self.value = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_value(&mut self) -> &mut ::std::vec::Vec<u8> {
        &mut self.value
    }

    // Take field
    pub fn take_value(&mut self) -> ::std::vec::Vec<u8> {
        ::std::mem::replace(&mut self.value, ::std::vec::Vec::new())
    }
}

impl ::protobuf::Message for Action_Param {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.param_id = tmp;
                },
                3 => {
                    ::protobuf::rt::read_singular_proto3_bytes_into(wire_type, is, &mut self.value)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.param_id != 0 {
            my_size += ::protobuf::rt::value_size(2, self.param_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.value.is_empty() {
            my_size += ::protobuf::rt::bytes_size(3, &self.value);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.param_id != 0 {
            os.write_uint32(2, self.param_id)?;
        }
        if !self.value.is_empty() {
            os.write_bytes(3, &self.value)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Action_Param {
        Action_Param::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "param_id",
                |m: &Action_Param| { &m.param_id },
                |m: &mut Action_Param| { &mut m.param_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBytes>(
                "value",
                |m: &Action_Param| { &m.value },
                |m: &mut Action_Param| { &mut m.value },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Action_Param>(
                "Action.Param",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Action_Param {
        static instance: ::protobuf::rt::LazyV2<Action_Param> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Action_Param::new)
    }
}

impl ::protobuf::Clear for Action_Param {
    fn clear(&mut self) {
        self.param_id = 0;
        self.value.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Action_Param {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Action_Param {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ActionProfileActionSet {
    // message fields
    pub action_profile_actions: ::protobuf::RepeatedField<ActionProfileAction>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ActionProfileActionSet {
    fn default() -> &'a ActionProfileActionSet {
        <ActionProfileActionSet as ::protobuf::Message>::default_instance()
    }
}

impl ActionProfileActionSet {
    pub fn new() -> ActionProfileActionSet {
        ::std::default::Default::default()
    }

    // repeated .p4.v1.ActionProfileAction action_profile_actions = 1;


    pub fn get_action_profile_actions(&self) -> &[ActionProfileAction] {
        &self.action_profile_actions
    }
    pub fn clear_action_profile_actions(&mut self) {
        self.action_profile_actions.clear();
    }

    // Param is passed by value, moved
    pub fn set_action_profile_actions(&mut self, v: ::protobuf::RepeatedField<ActionProfileAction>) {
        self.action_profile_actions = v;
    }

    // Mutable pointer to the field.
    pub fn mut_action_profile_actions(&mut self) -> &mut ::protobuf::RepeatedField<ActionProfileAction> {
        &mut self.action_profile_actions
    }

    // Take field
    pub fn take_action_profile_actions(&mut self) -> ::protobuf::RepeatedField<ActionProfileAction> {
        ::std::mem::replace(&mut self.action_profile_actions, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for ActionProfileActionSet {
    fn is_initialized(&self) -> bool {
        for v in &self.action_profile_actions {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.action_profile_actions)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        for value in &self.action_profile_actions {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        for v in &self.action_profile_actions {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ActionProfileActionSet {
        ActionProfileActionSet::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ActionProfileAction>>(
                "action_profile_actions",
                |m: &ActionProfileActionSet| { &m.action_profile_actions },
                |m: &mut ActionProfileActionSet| { &mut m.action_profile_actions },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ActionProfileActionSet>(
                "ActionProfileActionSet",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ActionProfileActionSet {
        static instance: ::protobuf::rt::LazyV2<ActionProfileActionSet> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ActionProfileActionSet::new)
    }
}

impl ::protobuf::Clear for ActionProfileActionSet {
    fn clear(&mut self) {
        self.action_profile_actions.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ActionProfileActionSet {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ActionProfileActionSet {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ActionProfileAction {
    // message fields
    pub action: ::protobuf::SingularPtrField<Action>,
    pub weight: i32,
    // message oneof groups
    pub watch_kind: ::std::option::Option<ActionProfileAction_oneof_watch_kind>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ActionProfileAction {
    fn default() -> &'a ActionProfileAction {
        <ActionProfileAction as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum ActionProfileAction_oneof_watch_kind {
    watch(i32),
    watch_port(::std::vec::Vec<u8>),
}

impl ActionProfileAction {
    pub fn new() -> ActionProfileAction {
        ::std::default::Default::default()
    }

    // .p4.v1.Action action = 1;


    pub fn get_action(&self) -> &Action {
        self.action.as_ref().unwrap_or_else(|| <Action as ::protobuf::Message>::default_instance())
    }
    pub fn clear_action(&mut self) {
        self.action.clear();
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    // Param is passed by value, moved
    pub fn set_action(&mut self, v: Action) {
        self.action = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_action(&mut self) -> &mut Action {
        if self.action.is_none() {
            self.action.set_default();
        }
        self.action.as_mut().unwrap()
    }

    // Take field
    pub fn take_action(&mut self) -> Action {
        self.action.take().unwrap_or_else(|| Action::new())
    }

    // int32 weight = 2;


    pub fn get_weight(&self) -> i32 {
        self.weight
    }
    pub fn clear_weight(&mut self) {
        self.weight = 0;
    }

    // Param is passed by value, moved
    pub fn set_weight(&mut self, v: i32) {
        self.weight = v;
    }

    // int32 watch = 3;


    pub fn get_watch(&self) -> i32 {
        match self.watch_kind {
            ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch(v)) => v,
            _ => 0,
        }
    }
    pub fn clear_watch(&mut self) {
        self.watch_kind = ::std::option::Option::None;
    }

    pub fn has_watch(&self) -> bool {
        match self.watch_kind {
            ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_watch(&mut self, v: i32) {
        self.watch_kind = ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch(v))
    }

    // bytes watch_port = 4;


    pub fn get_watch_port(&self) -> &[u8] {
        match self.watch_kind {
            ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch_port(ref v)) => v,
            _ => &[],
        }
    }
    pub fn clear_watch_port(&mut self) {
        self.watch_kind = ::std::option::Option::None;
    }

    pub fn has_watch_port(&self) -> bool {
        match self.watch_kind {
            ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch_port(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_watch_port(&mut self, v: ::std::vec::Vec<u8>) {
        self.watch_kind = ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch_port(v))
    }

    // Mutable pointer to the field.
    pub fn mut_watch_port(&mut self) -> &mut ::std::vec::Vec<u8> {
        if let ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch_port(_)) = self.watch_kind {
        } else {
            self.watch_kind = ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch_port(::std::vec::Vec::new()));
        }
        match self.watch_kind {
            ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch_port(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_watch_port(&mut self) -> ::std::vec::Vec<u8> {
        if self.has_watch_port() {
            match self.watch_kind.take() {
                ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch_port(v)) => v,
                _ => panic!(),
            }
        } else {
            ::std::vec::Vec::new()
        }
    }
}

impl ::protobuf::Message for ActionProfileAction {
    fn is_initialized(&self) -> bool {
        for v in &self.action {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.action)?;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.weight = tmp;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.watch_kind = ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch(is.read_int32()?));
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.watch_kind = ::std::option::Option::Some(ActionProfileAction_oneof_watch_kind::watch_port(is.read_bytes()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.action.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.weight != 0 {
            my_size += ::protobuf::rt::value_size(2, self.weight, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.watch_kind {
            match v {
                &ActionProfileAction_oneof_watch_kind::watch(v) => {
                    my_size += ::protobuf::rt::value_size(3, v, ::protobuf::wire_format::WireTypeVarint);
                },
                &ActionProfileAction_oneof_watch_kind::watch_port(ref v) => {
                    my_size += ::protobuf::rt::bytes_size(4, &v);
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.action.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.weight != 0 {
            os.write_int32(2, self.weight)?;
        }
        if let ::std::option::Option::Some(ref v) = self.watch_kind {
            match v {
                &ActionProfileAction_oneof_watch_kind::watch(v) => {
                    os.write_int32(3, v)?;
                },
                &ActionProfileAction_oneof_watch_kind::watch_port(ref v) => {
                    os.write_bytes(4, v)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ActionProfileAction {
        ActionProfileAction::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Action>>(
                "action",
                |m: &ActionProfileAction| { &m.action },
                |m: &mut ActionProfileAction| { &mut m.action },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "weight",
                |m: &ActionProfileAction| { &m.weight },
                |m: &mut ActionProfileAction| { &mut m.weight },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_i32_accessor::<_>(
                "watch",
                ActionProfileAction::has_watch,
                ActionProfileAction::get_watch,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_bytes_accessor::<_>(
                "watch_port",
                ActionProfileAction::has_watch_port,
                ActionProfileAction::get_watch_port,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ActionProfileAction>(
                "ActionProfileAction",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ActionProfileAction {
        static instance: ::protobuf::rt::LazyV2<ActionProfileAction> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ActionProfileAction::new)
    }
}

impl ::protobuf::Clear for ActionProfileAction {
    fn clear(&mut self) {
        self.action.clear();
        self.weight = 0;
        self.watch_kind = ::std::option::Option::None;
        self.watch_kind = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ActionProfileAction {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ActionProfileAction {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Index {
    // message fields
    pub index: i64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Index {
    fn default() -> &'a Index {
        <Index as ::protobuf::Message>::default_instance()
    }
}

impl Index {
    pub fn new() -> Index {
        ::std::default::Default::default()
    }

    // int64 index = 1;


    pub fn get_index(&self) -> i64 {
        self.index
    }
    pub fn clear_index(&mut self) {
        self.index = 0;
    }

    // Param is passed by value, moved
    pub fn set_index(&mut self, v: i64) {
        self.index = v;
    }
}

impl ::protobuf::Message for Index {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.index = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.index != 0 {
            my_size += ::protobuf::rt::value_size(1, self.index, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.index != 0 {
            os.write_int64(1, self.index)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Index {
        Index::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "index",
                |m: &Index| { &m.index },
                |m: &mut Index| { &mut m.index },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Index>(
                "Index",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Index {
        static instance: ::protobuf::rt::LazyV2<Index> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Index::new)
    }
}

impl ::protobuf::Clear for Index {
    fn clear(&mut self) {
        self.index = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Index {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Index {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct MeterEntry {
    // message fields
    pub meter_id: u32,
    pub index: ::protobuf::SingularPtrField<Index>,
    pub config: ::protobuf::SingularPtrField<MeterConfig>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a MeterEntry {
    fn default() -> &'a MeterEntry {
        <MeterEntry as ::protobuf::Message>::default_instance()
    }
}

impl MeterEntry {
    pub fn new() -> MeterEntry {
        ::std::default::Default::default()
    }

    // uint32 meter_id = 1;


    pub fn get_meter_id(&self) -> u32 {
        self.meter_id
    }
    pub fn clear_meter_id(&mut self) {
        self.meter_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_meter_id(&mut self, v: u32) {
        self.meter_id = v;
    }

    // .p4.v1.Index index = 2;


    pub fn get_index(&self) -> &Index {
        self.index.as_ref().unwrap_or_else(|| <Index as ::protobuf::Message>::default_instance())
    }
    pub fn clear_index(&mut self) {
        self.index.clear();
    }

    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    // Param is passed by value, moved
    pub fn set_index(&mut self, v: Index) {
        self.index = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_index(&mut self) -> &mut Index {
        if self.index.is_none() {
            self.index.set_default();
        }
        self.index.as_mut().unwrap()
    }

    // Take field
    pub fn take_index(&mut self) -> Index {
        self.index.take().unwrap_or_else(|| Index::new())
    }

    // .p4.v1.MeterConfig config = 3;


    pub fn get_config(&self) -> &MeterConfig {
        self.config.as_ref().unwrap_or_else(|| <MeterConfig as ::protobuf::Message>::default_instance())
    }
    pub fn clear_config(&mut self) {
        self.config.clear();
    }

    pub fn has_config(&self) -> bool {
        self.config.is_some()
    }

    // Param is passed by value, moved
    pub fn set_config(&mut self, v: MeterConfig) {
        self.config = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_config(&mut self) -> &mut MeterConfig {
        if self.config.is_none() {
            self.config.set_default();
        }
        self.config.as_mut().unwrap()
    }

    // Take field
    pub fn take_config(&mut self) -> MeterConfig {
        self.config.take().unwrap_or_else(|| MeterConfig::new())
    }
}

impl ::protobuf::Message for MeterEntry {
    fn is_initialized(&self) -> bool {
        for v in &self.index {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.config {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.meter_id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.index)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.config)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.meter_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.meter_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.index.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.config.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.meter_id != 0 {
            os.write_uint32(1, self.meter_id)?;
        }
        if let Some(ref v) = self.index.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.config.as_ref() {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> MeterEntry {
        MeterEntry::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "meter_id",
                |m: &MeterEntry| { &m.meter_id },
                |m: &mut MeterEntry| { &mut m.meter_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Index>>(
                "index",
                |m: &MeterEntry| { &m.index },
                |m: &mut MeterEntry| { &mut m.index },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<MeterConfig>>(
                "config",
                |m: &MeterEntry| { &m.config },
                |m: &mut MeterEntry| { &mut m.config },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<MeterEntry>(
                "MeterEntry",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static MeterEntry {
        static instance: ::protobuf::rt::LazyV2<MeterEntry> = ::protobuf::rt::LazyV2::INIT;
        instance.get(MeterEntry::new)
    }
}

impl ::protobuf::Clear for MeterEntry {
    fn clear(&mut self) {
        self.meter_id = 0;
        self.index.clear();
        self.config.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for MeterEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MeterEntry {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct MeterConfig {
    // message fields
    pub cir: i64,
    pub cburst: i64,
    pub pir: i64,
    pub pburst: i64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a MeterConfig {
    fn default() -> &'a MeterConfig {
        <MeterConfig as ::protobuf::Message>::default_instance()
    }
}

impl MeterConfig {
    pub fn new() -> MeterConfig {
        ::std::default::Default::default()
    }

    // int64 cir = 1;


    pub fn get_cir(&self) -> i64 {
        self.cir
    }
    pub fn clear_cir(&mut self) {
        self.cir = 0;
    }

    // Param is passed by value, moved
    pub fn set_cir(&mut self, v: i64) {
        self.cir = v;
    }

    // int64 cburst = 2;


    pub fn get_cburst(&self) -> i64 {
        self.cburst
    }
    pub fn clear_cburst(&mut self) {
        self.cburst = 0;
    }

    // Param is passed by value, moved
    pub fn set_cburst(&mut self, v: i64) {
        self.cburst = v;
    }

    // int64 pir = 3;


    pub fn get_pir(&self) -> i64 {
        self.pir
    }
    pub fn clear_pir(&mut self) {
        self.pir = 0;
    }

    // Param is passed by value, moved
    pub fn set_pir(&mut self, v: i64) {
        self.pir = v;
    }

    // int64 pburst = 4;


    pub fn get_pburst(&self) -> i64 {
        self.pburst
    }
    pub fn clear_pburst(&mut self) {
        self.pburst = 0;
    }

    // Param is passed by value, moved
    pub fn set_pburst(&mut self, v: i64) {
        self.pburst = v;
    }
}

impl ::protobuf::Message for MeterConfig {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.cir = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.cburst = tmp;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.pir = tmp;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.pburst = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.cir != 0 {
            my_size += ::protobuf::rt::value_size(1, self.cir, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.cburst != 0 {
            my_size += ::protobuf::rt::value_size(2, self.cburst, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.pir != 0 {
            my_size += ::protobuf::rt::value_size(3, self.pir, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.pburst != 0 {
            my_size += ::protobuf::rt::value_size(4, self.pburst, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.cir != 0 {
            os.write_int64(1, self.cir)?;
        }
        if self.cburst != 0 {
            os.write_int64(2, self.cburst)?;
        }
        if self.pir != 0 {
            os.write_int64(3, self.pir)?;
        }
        if self.pburst != 0 {
            os.write_int64(4, self.pburst)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> MeterConfig {
        MeterConfig::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "cir",
                |m: &MeterConfig| { &m.cir },
                |m: &mut MeterConfig| { &mut m.cir },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "cburst",
                |m: &MeterConfig| { &m.cburst },
                |m: &mut MeterConfig| { &mut m.cburst },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "pir",
                |m: &MeterConfig| { &m.pir },
                |m: &mut MeterConfig| { &mut m.pir },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "pburst",
                |m: &MeterConfig| { &m.pburst },
                |m: &mut MeterConfig| { &mut m.pburst },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<MeterConfig>(
                "MeterConfig",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static MeterConfig {
        static instance: ::protobuf::rt::LazyV2<MeterConfig> = ::protobuf::rt::LazyV2::INIT;
        instance.get(MeterConfig::new)
    }
}

impl ::protobuf::Clear for MeterConfig {
    fn clear(&mut self) {
        self.cir = 0;
        self.cburst = 0;
        self.pir = 0;
        self.pburst = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for MeterConfig {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MeterConfig {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct CounterEntry {
    // message fields
    pub counter_id: u32,
    pub index: ::protobuf::SingularPtrField<Index>,
    pub data: ::protobuf::SingularPtrField<CounterData>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a CounterEntry {
    fn default() -> &'a CounterEntry {
        <CounterEntry as ::protobuf::Message>::default_instance()
    }
}

impl CounterEntry {
    pub fn new() -> CounterEntry {
        ::std::default::Default::default()
    }

    // uint32 counter_id = 1;


    pub fn get_counter_id(&self) -> u32 {
        self.counter_id
    }
    pub fn clear_counter_id(&mut self) {
        self.counter_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_counter_id(&mut self, v: u32) {
        self.counter_id = v;
    }

    // .p4.v1.Index index = 2;


    pub fn get_index(&self) -> &Index {
        self.index.as_ref().unwrap_or_else(|| <Index as ::protobuf::Message>::default_instance())
    }
    pub fn clear_index(&mut self) {
        self.index.clear();
    }

    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    // Param is passed by value, moved
    pub fn set_index(&mut self, v: Index) {
        self.index = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_index(&mut self) -> &mut Index {
        if self.index.is_none() {
            self.index.set_default();
        }
        self.index.as_mut().unwrap()
    }

    // Take field
    pub fn take_index(&mut self) -> Index {
        self.index.take().unwrap_or_else(|| Index::new())
    }

    // .p4.v1.CounterData data = 3;


    pub fn get_data(&self) -> &CounterData {
        self.data.as_ref().unwrap_or_else(|| <CounterData as ::protobuf::Message>::default_instance())
    }
    pub fn clear_data(&mut self) {
        self.data.clear();
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    // Param is passed by value, moved
    pub fn set_data(&mut self, v: CounterData) {
        self.data = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_data(&mut self) -> &mut CounterData {
        if self.data.is_none() {
            self.data.set_default();
        }
        self.data.as_mut().unwrap()
    }

    // Take field
    pub fn take_data(&mut self) -> CounterData {
        self.data.take().unwrap_or_else(|| CounterData::new())
    }
}

impl ::protobuf::Message for CounterEntry {
    fn is_initialized(&self) -> bool {
        for v in &self.index {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.data {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.counter_id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.index)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.data)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.counter_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.counter_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.index.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.data.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.counter_id != 0 {
            os.write_uint32(1, self.counter_id)?;
        }
        if let Some(ref v) = self.index.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.data.as_ref() {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> CounterEntry {
        CounterEntry::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "counter_id",
                |m: &CounterEntry| { &m.counter_id },
                |m: &mut CounterEntry| { &mut m.counter_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Index>>(
                "index",
                |m: &CounterEntry| { &m.index },
                |m: &mut CounterEntry| { &mut m.index },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<CounterData>>(
                "data",
                |m: &CounterEntry| { &m.data },
                |m: &mut CounterEntry| { &mut m.data },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<CounterEntry>(
                "CounterEntry",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static CounterEntry {
        static instance: ::protobuf::rt::LazyV2<CounterEntry> = ::protobuf::rt::LazyV2::INIT;
        instance.get(CounterEntry::new)
    }
}

impl ::protobuf::Clear for CounterEntry {
    fn clear(&mut self) {
        self.counter_id = 0;
        self.index.clear();
        self.data.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for CounterEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for CounterEntry {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct CounterData {
    // message fields
    pub byte_count: i64,
    pub packet_count: i64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a CounterData {
    fn default() -> &'a CounterData {
        <CounterData as ::protobuf::Message>::default_instance()
    }
}

impl CounterData {
    pub fn new() -> CounterData {
        ::std::default::Default::default()
    }

    // int64 byte_count = 1;


    pub fn get_byte_count(&self) -> i64 {
        self.byte_count
    }
    pub fn clear_byte_count(&mut self) {
        self.byte_count = 0;
    }

    // Param is passed by value, moved
    pub fn set_byte_count(&mut self, v: i64) {
        self.byte_count = v;
    }

    // int64 packet_count = 2;


    pub fn get_packet_count(&self) -> i64 {
        self.packet_count
    }
    pub fn clear_packet_count(&mut self) {
        self.packet_count = 0;
    }

    // Param is passed by value, moved
    pub fn set_packet_count(&mut self, v: i64) {
        self.packet_count = v;
    }
}

impl ::protobuf::Message for CounterData {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.byte_count = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.packet_count = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.byte_count != 0 {
            my_size += ::protobuf::rt::value_size(1, self.byte_count, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.packet_count != 0 {
            my_size += ::protobuf::rt::value_size(2, self.packet_count, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.byte_count != 0 {
            os.write_int64(1, self.byte_count)?;
        }
        if self.packet_count != 0 {
            os.write_int64(2, self.packet_count)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> CounterData {
        CounterData::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "byte_count",
                |m: &CounterData| { &m.byte_count },
                |m: &mut CounterData| { &mut m.byte_count },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "packet_count",
                |m: &CounterData| { &m.packet_count },
                |m: &mut CounterData| { &mut m.packet_count },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<CounterData>(
                "CounterData",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static CounterData {
        static instance: ::protobuf::rt::LazyV2<CounterData> = ::protobuf::rt::LazyV2::INIT;
        instance.get(CounterData::new)
    }
}

impl ::protobuf::Clear for CounterData {
    fn clear(&mut self) {
        self.byte_count = 0;
        self.packet_count = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for CounterData {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for CounterData {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct PacketReplicationEngineEntry {
    // message oneof groups
    pub field_type: ::std::option::Option<PacketReplicationEngineEntry_oneof_type>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a PacketReplicationEngineEntry {
    fn default() -> &'a PacketReplicationEngineEntry {
        <PacketReplicationEngineEntry as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum PacketReplicationEngineEntry_oneof_type {
    multicast_group_entry(MulticastGroupEntry),
    clone_session_entry(CloneSessionEntry),
}

impl PacketReplicationEngineEntry {
    pub fn new() -> PacketReplicationEngineEntry {
        ::std::default::Default::default()
    }

    // .p4.v1.MulticastGroupEntry multicast_group_entry = 1;


    pub fn get_multicast_group_entry(&self) -> &MulticastGroupEntry {
        match self.field_type {
            ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(ref v)) => v,
            _ => <MulticastGroupEntry as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_multicast_group_entry(&mut self) {
        self.field_type = ::std::option::Option::None;
    }

    pub fn has_multicast_group_entry(&self) -> bool {
        match self.field_type {
            ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_multicast_group_entry(&mut self, v: MulticastGroupEntry) {
        self.field_type = ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_multicast_group_entry(&mut self) -> &mut MulticastGroupEntry {
        if let ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(_)) = self.field_type {
        } else {
            self.field_type = ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(MulticastGroupEntry::new()));
        }
        match self.field_type {
            ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_multicast_group_entry(&mut self) -> MulticastGroupEntry {
        if self.has_multicast_group_entry() {
            match self.field_type.take() {
                ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(v)) => v,
                _ => panic!(),
            }
        } else {
            MulticastGroupEntry::new()
        }
    }

    // .p4.v1.CloneSessionEntry clone_session_entry = 2;


    pub fn get_clone_session_entry(&self) -> &CloneSessionEntry {
        match self.field_type {
            ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(ref v)) => v,
            _ => <CloneSessionEntry as ::protobuf::Message>::default_instance(),
        }
    }
    pub fn clear_clone_session_entry(&mut self) {
        self.field_type = ::std::option::Option::None;
    }

    pub fn has_clone_session_entry(&self) -> bool {
        match self.field_type {
            ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_clone_session_entry(&mut self, v: CloneSessionEntry) {
        self.field_type = ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_clone_session_entry(&mut self) -> &mut CloneSessionEntry {
        if let ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(_)) = self.field_type {
        } else {
            self.field_type = ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(CloneSessionEntry::new()));
        }
        match self.field_type {
            ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_clone_session_entry(&mut self) -> CloneSessionEntry {
        if self.has_clone_session_entry() {
            match self.field_type.take() {
                ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(v)) => v,
                _ => panic!(),
            }
        } else {
            CloneSessionEntry::new()
        }
    }
}

impl ::protobuf::Message for PacketReplicationEngineEntry {
    fn is_initialized(&self) -> bool {
        if let Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(ref v)) = self.field_type {
            if !v.is_initialized() {
                return false;
            }
        }
        if let Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(ref v)) = self.field_type {
            if !v.is_initialized() {
                return false;
            }
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_type = ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(is.read_message()?));
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_type = ::std::option::Option::Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(is.read_message()?));
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let ::std::option::Option::Some(ref v) = self.field_type {
            match v {
                &PacketReplicationEngineEntry_oneof_type::multicast_group_entry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
                &PacketReplicationEngineEntry_oneof_type::clone_session_entry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let ::std::option::Option::Some(ref v) = self.field_type {
            match v {
                &PacketReplicationEngineEntry_oneof_type::multicast_group_entry(ref v) => {
                    os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
                &PacketReplicationEngineEntry_oneof_type::clone_session_entry(ref v) => {
                    os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
                    os.write_raw_varint32(v.get_cached_size())?;
                    v.write_to_with_cached_sizes(os)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> PacketReplicationEngineEntry {
        PacketReplicationEngineEntry::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, MulticastGroupEntry>(
                "multicast_group_entry",
                PacketReplicationEngineEntry::has_multicast_group_entry,
                PacketReplicationEngineEntry::get_multicast_group_entry,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_message_accessor::<_, CloneSessionEntry>(
                "clone_session_entry",
                PacketReplicationEngineEntry::has_clone_session_entry,
                PacketReplicationEngineEntry::get_clone_session_entry,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<PacketReplicationEngineEntry>(
                "PacketReplicationEngineEntry",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static PacketReplicationEngineEntry {
        static instance: ::protobuf::rt::LazyV2<PacketReplicationEngineEntry> = ::protobuf::rt::LazyV2::INIT;
        instance.get(PacketReplicationEngineEntry::new)
    }
}

impl ::protobuf::Clear for PacketReplicationEngineEntry {
    fn clear(&mut self) {
        self.field_type = ::std::option::Option::None;
        self.field_type = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for PacketReplicationEngineEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for PacketReplicationEngineEntry {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Replica {
    // message fields
    pub egress_port: u32,
    pub instance: u32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Replica {
    fn default() -> &'a Replica {
        <Replica as ::protobuf::Message>::default_instance()
    }
}

impl Replica {
    pub fn new() -> Replica {
        ::std::default::Default::default()
    }

    // uint32 egress_port = 1;


    pub fn get_egress_port(&self) -> u32 {
        self.egress_port
    }
    pub fn clear_egress_port(&mut self) {
        self.egress_port = 0;
    }

    // Param is passed by value, moved
    pub fn set_egress_port(&mut self, v: u32) {
        self.egress_port = v;
    }

    // uint32 instance = 2;


    pub fn get_instance(&self) -> u32 {
        self.instance
    }
    pub fn clear_instance(&mut self) {
        self.instance = 0;
    }

    // Param is passed by value, moved
    pub fn set_instance(&mut self, v: u32) {
        self.instance = v;
    }
}

impl ::protobuf::Message for Replica {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.egress_port = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.instance = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.egress_port != 0 {
            my_size += ::protobuf::rt::value_size(1, self.egress_port, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.instance != 0 {
            my_size += ::protobuf::rt::value_size(2, self.instance, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.egress_port != 0 {
            os.write_uint32(1, self.egress_port)?;
        }
        if self.instance != 0 {
            os.write_uint32(2, self.instance)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Replica {
        Replica::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "egress_port",
                |m: &Replica| { &m.egress_port },
                |m: &mut Replica| { &mut m.egress_port },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "instance",
                |m: &Replica| { &m.instance },
                |m: &mut Replica| { &mut m.instance },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Replica>(
                "Replica",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Replica {
        static instance: ::protobuf::rt::LazyV2<Replica> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Replica::new)
    }
}

impl ::protobuf::Clear for Replica {
    fn clear(&mut self) {
        self.egress_port = 0;
        self.instance = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Replica {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Replica {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct MulticastGroupEntry {
    // message fields
    pub multicast_group_id: u32,
    pub replicas: ::protobuf::RepeatedField<Replica>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a MulticastGroupEntry {
    fn default() -> &'a MulticastGroupEntry {
        <MulticastGroupEntry as ::protobuf::Message>::default_instance()
    }
}

impl MulticastGroupEntry {
    pub fn new() -> MulticastGroupEntry {
        ::std::default::Default::default()
    }

    // uint32 multicast_group_id = 1;


    pub fn get_multicast_group_id(&self) -> u32 {
        self.multicast_group_id
    }
    pub fn clear_multicast_group_id(&mut self) {
        self.multicast_group_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_multicast_group_id(&mut self, v: u32) {
        self.multicast_group_id = v;
    }

    // repeated .p4.v1.Replica replicas = 2;


    pub fn get_replicas(&self) -> &[Replica] {
        &self.replicas
    }
    pub fn clear_replicas(&mut self) {
        self.replicas.clear();
    }

    // Param is passed by value, moved
    pub fn set_replicas(&mut self, v: ::protobuf::RepeatedField<Replica>) {
        self.replicas = v;
    }

    // Mutable pointer to the field.
    pub fn mut_replicas(&mut self) -> &mut ::protobuf::RepeatedField<Replica> {
        &mut self.replicas
    }

    // Take field
    pub fn take_replicas(&mut self) -> ::protobuf::RepeatedField<Replica> {
        ::std::mem::replace(&mut self.replicas, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for MulticastGroupEntry {
    fn is_initialized(&self) -> bool {
        for v in &self.replicas {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.multicast_group_id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.replicas)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.multicast_group_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.multicast_group_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.replicas {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.multicast_group_id != 0 {
            os.write_uint32(1, self.multicast_group_id)?;
        }
        for v in &self.replicas {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> MulticastGroupEntry {
        MulticastGroupEntry::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "multicast_group_id",
                |m: &MulticastGroupEntry| { &m.multicast_group_id },
                |m: &mut MulticastGroupEntry| { &mut m.multicast_group_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Replica>>(
                "replicas",
                |m: &MulticastGroupEntry| { &m.replicas },
                |m: &mut MulticastGroupEntry| { &mut m.replicas },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<MulticastGroupEntry>(
                "MulticastGroupEntry",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static MulticastGroupEntry {
        static instance: ::protobuf::rt::LazyV2<MulticastGroupEntry> = ::protobuf::rt::LazyV2::INIT;
        instance.get(MulticastGroupEntry::new)
    }
}

impl ::protobuf::Clear for MulticastGroupEntry {
    fn clear(&mut self) {
        self.multicast_group_id = 0;
        self.replicas.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for MulticastGroupEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MulticastGroupEntry {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct CloneSessionEntry {
    // message fields
    pub session_id: u32,
    pub replicas: ::protobuf::RepeatedField<Replica>,
    pub class_of_service: u32,
    pub packet_length_bytes: i32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a CloneSessionEntry {
    fn default() -> &'a CloneSessionEntry {
        <CloneSessionEntry as ::protobuf::Message>::default_instance()
    }
}

impl CloneSessionEntry {
    pub fn new() -> CloneSessionEntry {
        ::std::default::Default::default()
    }

    // uint32 session_id = 1;


    pub fn get_session_id(&self) -> u32 {
        self.session_id
    }
    pub fn clear_session_id(&mut self) {
        self.session_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_session_id(&mut self, v: u32) {
        self.session_id = v;
    }

    // repeated .p4.v1.Replica replicas = 2;


    pub fn get_replicas(&self) -> &[Replica] {
        &self.replicas
    }
    pub fn clear_replicas(&mut self) {
        self.replicas.clear();
    }

    // Param is passed by value, moved
    pub fn set_replicas(&mut self, v: ::protobuf::RepeatedField<Replica>) {
        self.replicas = v;
    }

    // Mutable pointer to the field.
    pub fn mut_replicas(&mut self) -> &mut ::protobuf::RepeatedField<Replica> {
        &mut self.replicas
    }

    // Take field
    pub fn take_replicas(&mut self) -> ::protobuf::RepeatedField<Replica> {
        ::std::mem::replace(&mut self.replicas, ::protobuf::RepeatedField::new())
    }

    // uint32 class_of_service = 3;


    pub fn get_class_of_service(&self) -> u32 {
        self.class_of_service
    }
    pub fn clear_class_of_service(&mut self) {
        self.class_of_service = 0;
    }

    // Param is passed by value, moved
    pub fn set_class_of_service(&mut self, v: u32) {
        self.class_of_service = v;
    }

    // int32 packet_length_bytes = 4;


    pub fn get_packet_length_bytes(&self) -> i32 {
        self.packet_length_bytes
    }
    pub fn clear_packet_length_bytes(&mut self) {
        self.packet_length_bytes = 0;
    }

    // Param is passed by value, moved
    pub fn set_packet_length_bytes(&mut self, v: i32) {
        self.packet_length_bytes = v;
    }
}

impl ::protobuf::Message for CloneSessionEntry {
    fn is_initialized(&self) -> bool {
        for v in &self.replicas {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.session_id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.replicas)?;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.class_of_service = tmp;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.packet_length_bytes = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.session_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.session_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.replicas {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        if self.class_of_service != 0 {
            my_size += ::protobuf::rt::value_size(3, self.class_of_service, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.packet_length_bytes != 0 {
            my_size += ::protobuf::rt::value_size(4, self.packet_length_bytes, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.session_id != 0 {
            os.write_uint32(1, self.session_id)?;
        }
        for v in &self.replicas {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        if self.class_of_service != 0 {
            os.write_uint32(3, self.class_of_service)?;
        }
        if self.packet_length_bytes != 0 {
            os.write_int32(4, self.packet_length_bytes)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> CloneSessionEntry {
        CloneSessionEntry::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "session_id",
                |m: &CloneSessionEntry| { &m.session_id },
                |m: &mut CloneSessionEntry| { &mut m.session_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Replica>>(
                "replicas",
                |m: &CloneSessionEntry| { &m.replicas },
                |m: &mut CloneSessionEntry| { &mut m.replicas },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "class_of_service",
                |m: &CloneSessionEntry| { &m.class_of_service },
                |m: &mut CloneSessionEntry| { &mut m.class_of_service },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "packet_length_bytes",
                |m: &CloneSessionEntry| { &m.packet_length_bytes },
                |m: &mut CloneSessionEntry| { &mut m.packet_length_bytes },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<CloneSessionEntry>(
                "CloneSessionEntry",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static CloneSessionEntry {
        static instance: ::protobuf::rt::LazyV2<CloneSessionEntry> = ::protobuf::rt::LazyV2::INIT;
        instance.get(CloneSessionEntry::new)
    }
}

impl ::protobuf::Clear for CloneSessionEntry {
    fn clear(&mut self) {
        self.session_id = 0;
        self.replicas.clear();
        self.class_of_service = 0;
        self.packet_length_bytes = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for CloneSessionEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for CloneSessionEntry {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DigestEntry {
    // message fields
    pub digest_id: u32,
    pub config: ::protobuf::SingularPtrField<DigestEntry_Config>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DigestEntry {
    fn default() -> &'a DigestEntry {
        <DigestEntry as ::protobuf::Message>::default_instance()
    }
}

impl DigestEntry {
    pub fn new() -> DigestEntry {
        ::std::default::Default::default()
    }

    // uint32 digest_id = 1;


    pub fn get_digest_id(&self) -> u32 {
        self.digest_id
    }
    pub fn clear_digest_id(&mut self) {
        self.digest_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_digest_id(&mut self, v: u32) {
        self.digest_id = v;
    }

    // .p4.v1.DigestEntry.Config config = 2;


    pub fn get_config(&self) -> &DigestEntry_Config {
        self.config.as_ref().unwrap_or_else(|| <DigestEntry_Config as ::protobuf::Message>::default_instance())
    }
    pub fn clear_config(&mut self) {
        self.config.clear();
    }

    pub fn has_config(&self) -> bool {
        self.config.is_some()
    }

    // Param is passed by value, moved
    pub fn set_config(&mut self, v: DigestEntry_Config) {
        self.config = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_config(&mut self) -> &mut DigestEntry_Config {
        if self.config.is_none() {
            self.config.set_default();
        }
        self.config.as_mut().unwrap()
    }

    // Take field
    pub fn take_config(&mut self) -> DigestEntry_Config {
        self.config.take().unwrap_or_else(|| DigestEntry_Config::new())
    }
}

impl ::protobuf::Message for DigestEntry {
    fn is_initialized(&self) -> bool {
        for v in &self.config {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.digest_id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.config)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.digest_id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.digest_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.config.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.digest_id != 0 {
            os.write_uint32(1, self.digest_id)?;
        }
        if let Some(ref v) = self.config.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DigestEntry {
        DigestEntry::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "digest_id",
                |m: &DigestEntry| { &m.digest_id },
                |m: &mut DigestEntry| { &mut m.digest_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<DigestEntry_Config>>(
                "config",
                |m: &DigestEntry| { &m.config },
                |m: &mut DigestEntry| { &mut m.config },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DigestEntry>(
                "DigestEntry",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DigestEntry {
        static instance: ::protobuf::rt::LazyV2<DigestEntry> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DigestEntry::new)
    }
}

impl ::protobuf::Clear for DigestEntry {
    fn clear(&mut self) {
        self.digest_id = 0;
        self.config.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DigestEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DigestEntry {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct DigestEntry_Config {
    // message fields
    pub max_timeout_ns: i64,
    pub max_list_size: i32,
    pub ack_timeout_ns: i64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a DigestEntry_Config {
    fn default() -> &'a DigestEntry_Config {
        <DigestEntry_Config as ::protobuf::Message>::default_instance()
    }
}

impl DigestEntry_Config {
    pub fn new() -> DigestEntry_Config {
        ::std::default::Default::default()
    }

    // int64 max_timeout_ns = 1;


    pub fn get_max_timeout_ns(&self) -> i64 {
        self.max_timeout_ns
    }
    pub fn clear_max_timeout_ns(&mut self) {
        self.max_timeout_ns = 0;
    }

    // Param is passed by value, moved
    pub fn set_max_timeout_ns(&mut self, v: i64) {
        self.max_timeout_ns = v;
    }

    // int32 max_list_size = 2;


    pub fn get_max_list_size(&self) -> i32 {
        self.max_list_size
    }
    pub fn clear_max_list_size(&mut self) {
        self.max_list_size = 0;
    }

    // Param is passed by value, moved
    pub fn set_max_list_size(&mut self, v: i32) {
        self.max_list_size = v;
    }

    // int64 ack_timeout_ns = 3;


    pub fn get_ack_timeout_ns(&self) -> i64 {
        self.ack_timeout_ns
    }
    pub fn clear_ack_timeout_ns(&mut self) {
        self.ack_timeout_ns = 0;
    }

    // Param is passed by value, moved
    pub fn set_ack_timeout_ns(&mut self, v: i64) {
        self.ack_timeout_ns = v;
    }
}

impl ::protobuf::Message for DigestEntry_Config {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.max_timeout_ns = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.max_list_size = tmp;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.ack_timeout_ns = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.max_timeout_ns != 0 {
            my_size += ::protobuf::rt::value_size(1, self.max_timeout_ns, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.max_list_size != 0 {
            my_size += ::protobuf::rt::value_size(2, self.max_list_size, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.ack_timeout_ns != 0 {
            my_size += ::protobuf::rt::value_size(3, self.ack_timeout_ns, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.max_timeout_ns != 0 {
            os.write_int64(1, self.max_timeout_ns)?;
        }
        if self.max_list_size != 0 {
            os.write_int32(2, self.max_list_size)?;
        }
        if self.ack_timeout_ns != 0 {
            os.write_int64(3, self.ack_timeout_ns)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> DigestEntry_Config {
        DigestEntry_Config::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "max_timeout_ns",
                |m: &DigestEntry_Config| { &m.max_timeout_ns },
                |m: &mut DigestEntry_Config| { &mut m.max_timeout_ns },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "max_list_size",
                |m: &DigestEntry_Config| { &m.max_list_size },
                |m: &mut DigestEntry_Config| { &mut m.max_list_size },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "ack_timeout_ns",
                |m: &DigestEntry_Config| { &m.ack_timeout_ns },
                |m: &mut DigestEntry_Config| { &mut m.ack_timeout_ns },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<DigestEntry_Config>(
                "DigestEntry.Config",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static DigestEntry_Config {
        static instance: ::protobuf::rt::LazyV2<DigestEntry_Config> = ::protobuf::rt::LazyV2::INIT;
        instance.get(DigestEntry_Config::new)
    }
}

impl ::protobuf::Clear for DigestEntry_Config {
    fn clear(&mut self) {
        self.max_timeout_ns = 0;
        self.max_list_size = 0;
        self.ack_timeout_ns = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for DigestEntry_Config {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DigestEntry_Config {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Uint128 {
    // message fields
    pub high: u64,
    pub low: u64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Uint128 {
    fn default() -> &'a Uint128 {
        <Uint128 as ::protobuf::Message>::default_instance()
    }
}

impl Uint128 {
    pub fn new() -> Uint128 {
        ::std::default::Default::default()
    }

    // uint64 high = 1;


    pub fn get_high(&self) -> u64 {
        self.high
    }
    pub fn clear_high(&mut self) {
        self.high = 0;
    }

    // Param is passed by value, moved
    pub fn set_high(&mut self, v: u64) {
        self.high = v;
    }

    // uint64 low = 2;


    pub fn get_low(&self) -> u64 {
        self.low
    }
    pub fn clear_low(&mut self) {
        self.low = 0;
    }

    // Param is passed by value, moved
    pub fn set_low(&mut self, v: u64) {
        self.low = v;
    }
}

impl ::protobuf::Message for Uint128 {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint64()?;
                    self.high = tmp;
                },
                2 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint64()?;
                    self.low = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.high != 0 {
            my_size += ::protobuf::rt::value_size(1, self.high, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.low != 0 {
            my_size += ::protobuf::rt::value_size(2, self.low, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.high != 0 {
            os.write_uint64(1, self.high)?;
        }
        if self.low != 0 {
            os.write_uint64(2, self.low)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Uint128 {
        Uint128::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint64>(
                "high",
                |m: &Uint128| { &m.high },
                |m: &mut Uint128| { &mut m.high },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint64>(
                "low",
                |m: &Uint128| { &m.low },
                |m: &mut Uint128| { &mut m.low },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Uint128>(
                "Uint128",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Uint128 {
        static instance: ::protobuf::rt::LazyV2<Uint128> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Uint128::new)
    }
}

impl ::protobuf::Clear for Uint128 {
    fn clear(&mut self) {
        self.high = 0;
        self.low = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Uint128 {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Uint128 {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x15p4/v1/p4runtime.proto\x12\x05p4.v1\x1a\x19google/protobuf/any.prot\
    o\"\xd0\x02\n\x0cWriteRequest\x12\x1d\n\tdevice_id\x18\x01\x20\x01(\x04R\
    \x08deviceIdB\0\x12\x19\n\x07role_id\x18\x02\x20\x01(\x04R\x06roleIdB\0\
    \x12\x14\n\x04role\x18\x06\x20\x01(\tR\x04roleB\0\x121\n\x0belection_id\
    \x18\x03\x20\x01(\x0b2\x0e.p4.v1.Uint128R\nelectionIdB\0\x12)\n\x07updat\
    es\x18\x04\x20\x03(\x0b2\r.p4.v1.UpdateR\x07updatesB\0\x12=\n\tatomicity\
    \x18\x05\x20\x01(\x0e2\x1d.p4.v1.WriteRequest.AtomicityR\tatomicityB\0\"\
    Q\n\tAtomicity\x12\x15\n\x11CONTINUE_ON_ERROR\x10\0\x12\x15\n\x11ROLLBAC\
    K_ON_ERROR\x10\x01\x12\x14\n\x10DATAPLANE_ATOMIC\x10\x02\x1a\0:\0\"\x11\
    \n\rWriteResponse:\0\"q\n\x0bReadRequest\x12\x1d\n\tdevice_id\x18\x01\
    \x20\x01(\x04R\x08deviceIdB\0\x12\x14\n\x04role\x18\x03\x20\x01(\tR\x04r\
    oleB\0\x12+\n\x08entities\x18\x02\x20\x03(\x0b2\r.p4.v1.EntityR\x08entit\
    iesB\0:\0\"=\n\x0cReadResponse\x12+\n\x08entities\x18\x01\x20\x03(\x0b2\
    \r.p4.v1.EntityR\x08entitiesB\0:\0\"\x9c\x01\n\x06Update\x12(\n\x04type\
    \x18\x01\x20\x01(\x0e2\x12.p4.v1.Update.TypeR\x04typeB\0\x12'\n\x06entit\
    y\x18\x02\x20\x01(\x0b2\r.p4.v1.EntityR\x06entityB\0\"=\n\x04Type\x12\
    \x0f\n\x0bUNSPECIFIED\x10\0\x12\n\n\x06INSERT\x10\x01\x12\n\n\x06MODIFY\
    \x10\x02\x12\n\n\x06DELETE\x10\x03\x1a\0:\0\"\xed\x02\n\x06Entity\x126\n\
    \x0btable_entry\x18\x02\x20\x01(\x0b2\x11.p4.v1.TableEntryH\0R\ntableEnt\
    ryB\0\x126\n\x0bmeter_entry\x18\x05\x20\x01(\x0b2\x11.p4.v1.MeterEntryH\
    \0R\nmeterEntryB\0\x12<\n\rcounter_entry\x18\x07\x20\x01(\x0b2\x13.p4.v1\
    .CounterEntryH\0R\x0ccounterEntryB\0\x12n\n\x1fpacket_replication_engine\
    _entry\x18\t\x20\x01(\x0b2#.p4.v1.PacketReplicationEngineEntryH\0R\x1cpa\
    cketReplicationEngineEntryB\0\x129\n\x0cdigest_entry\x18\x0c\x20\x01(\
    \x0b2\x12.p4.v1.DigestEntryH\0R\x0bdigestEntryB\0B\x08\n\x06entity:\0\"\
    \xbf\x04\n\nTableEntry\x12\x1b\n\x08table_id\x18\x01\x20\x01(\rR\x07tabl\
    eIdB\0\x12)\n\x05match\x18\x02\x20\x03(\x0b2\x11.p4.v1.FieldMatchR\x05ma\
    tchB\0\x12,\n\x06action\x18\x03\x20\x01(\x0b2\x12.p4.v1.TableActionR\x06\
    actionB\0\x12\x1c\n\x08priority\x18\x04\x20\x01(\x05R\x08priorityB\0\x12\
    1\n\x13controller_metadata\x18\x05\x20\x01(\x04R\x12controllerMetadataB\
    \0\x127\n\x0cmeter_config\x18\x06\x20\x01(\x0b2\x12.p4.v1.MeterConfigR\
    \x0bmeterConfigB\0\x127\n\x0ccounter_data\x18\x07\x20\x01(\x0b2\x12.p4.v\
    1.CounterDataR\x0bcounterDataB\0\x12,\n\x11is_default_action\x18\x08\x20\
    \x01(\x08R\x0fisDefaultActionB\0\x12(\n\x0fidle_timeout_ns\x18\t\x20\x01\
    (\x03R\ridleTimeoutNsB\0\x12N\n\x13time_since_last_hit\x18\n\x20\x01(\
    \x0b2\x1d.p4.v1.TableEntry.IdleTimeoutR\x10timeSinceLastHitB\0\x12\x1c\n\
    \x08metadata\x18\x0b\x20\x01(\x0cR\x08metadataB\0\x1a0\n\x0bIdleTimeout\
    \x12\x1f\n\nelapsed_ns\x18\x01\x20\x01(\x03R\telapsedNsB\0:\0:\0\"\xf2\
    \x04\n\nFieldMatch\x12\x1b\n\x08field_id\x18\x01\x20\x01(\rR\x07fieldIdB\
    \0\x121\n\x05exact\x18\x02\x20\x01(\x0b2\x17.p4.v1.FieldMatch.ExactH\0R\
    \x05exactB\0\x127\n\x07ternary\x18\x03\x20\x01(\x0b2\x19.p4.v1.FieldMatc\
    h.TernaryH\0R\x07ternaryB\0\x12+\n\x03lpm\x18\x04\x20\x01(\x0b2\x15.p4.v\
    1.FieldMatch.LPMH\0R\x03lpmB\0\x121\n\x05range\x18\x06\x20\x01(\x0b2\x17\
    .p4.v1.FieldMatch.RangeH\0R\x05rangeB\0\x12:\n\x08optional\x18\x07\x20\
    \x01(\x0b2\x1a.p4.v1.FieldMatch.OptionalH\0R\x08optionalB\0\x12.\n\x05ot\
    her\x18d\x20\x01(\x0b2\x14.google.protobuf.AnyH\0R\x05otherB\0\x1a!\n\
    \x05Exact\x12\x16\n\x05value\x18\x01\x20\x01(\x0cR\x05valueB\0:\0\x1a9\n\
    \x07Ternary\x12\x16\n\x05value\x18\x01\x20\x01(\x0cR\x05valueB\0\x12\x14\
    \n\x04mask\x18\x02\x20\x01(\x0cR\x04maskB\0:\0\x1a@\n\x03LPM\x12\x16\n\
    \x05value\x18\x01\x20\x01(\x0cR\x05valueB\0\x12\x1f\n\nprefix_len\x18\
    \x02\x20\x01(\x05R\tprefixLenB\0:\0\x1a3\n\x05Range\x12\x12\n\x03low\x18\
    \x01\x20\x01(\x0cR\x03lowB\0\x12\x14\n\x04high\x18\x02\x20\x01(\x0cR\x04\
    highB\0:\0\x1a$\n\x08Optional\x12\x16\n\x05value\x18\x01\x20\x01(\x0cR\
    \x05valueB\0:\0B\x12\n\x10field_match_type:\0\"\x98\x02\n\x0bTableAction\
    \x12)\n\x06action\x18\x01\x20\x01(\x0b2\r.p4.v1.ActionH\0R\x06actionB\0\
    \x12;\n\x18action_profile_member_id\x18\x02\x20\x01(\rH\0R\x15actionProf\
    ileMemberIdB\0\x129\n\x17action_profile_group_id\x18\x03\x20\x01(\rH\0R\
    \x14actionProfileGroupIdB\0\x12\\\n\x19action_profile_action_set\x18\x04\
    \x20\x01(\x0b2\x1d.p4.v1.ActionProfileActionSetH\0R\x16actionProfileActi\
    onSetB\0B\x06\n\x04type:\0\"\x98\x01\n\x06Action\x12\x1d\n\taction_id\
    \x18\x01\x20\x01(\rR\x08actionIdB\0\x12-\n\x06params\x18\x04\x20\x03(\
    \x0b2\x13.p4.v1.Action.ParamR\x06paramsB\0\x1a>\n\x05Param\x12\x1b\n\x08\
    param_id\x18\x02\x20\x01(\rR\x07paramIdB\0\x12\x16\n\x05value\x18\x03\
    \x20\x01(\x0cR\x05valueB\0:\0:\0\"n\n\x16ActionProfileActionSet\x12R\n\
    \x16action_profile_actions\x18\x01\x20\x03(\x0b2\x1a.p4.v1.ActionProfile\
    ActionR\x14actionProfileActionsB\0:\0\"\xa7\x01\n\x13ActionProfileAction\
    \x12'\n\x06action\x18\x01\x20\x01(\x0b2\r.p4.v1.ActionR\x06actionB\0\x12\
    \x18\n\x06weight\x18\x02\x20\x01(\x05R\x06weightB\0\x12\x1a\n\x05watch\
    \x18\x03\x20\x01(\x05H\0R\x05watchB\x02\x18\x01\x12!\n\nwatch_port\x18\
    \x04\x20\x01(\x0cH\0R\twatchPortB\0B\x0c\n\nwatch_kind:\0\"!\n\x05Index\
    \x12\x16\n\x05index\x18\x01\x20\x01(\x03R\x05indexB\0:\0\"\x7f\n\nMeterE\
    ntry\x12\x1b\n\x08meter_id\x18\x01\x20\x01(\rR\x07meterIdB\0\x12$\n\x05i\
    ndex\x18\x02\x20\x01(\x0b2\x0c.p4.v1.IndexR\x05indexB\0\x12,\n\x06config\
    \x18\x03\x20\x01(\x0b2\x12.p4.v1.MeterConfigR\x06configB\0:\0\"k\n\x0bMe\
    terConfig\x12\x12\n\x03cir\x18\x01\x20\x01(\x03R\x03cirB\0\x12\x18\n\x06\
    cburst\x18\x02\x20\x01(\x03R\x06cburstB\0\x12\x12\n\x03pir\x18\x03\x20\
    \x01(\x03R\x03pirB\0\x12\x18\n\x06pburst\x18\x04\x20\x01(\x03R\x06pburst\
    B\0:\0\"\x81\x01\n\x0cCounterEntry\x12\x1f\n\ncounter_id\x18\x01\x20\x01\
    (\rR\tcounterIdB\0\x12$\n\x05index\x18\x02\x20\x01(\x0b2\x0c.p4.v1.Index\
    R\x05indexB\0\x12(\n\x04data\x18\x03\x20\x01(\x0b2\x12.p4.v1.CounterData\
    R\x04dataB\0:\0\"U\n\x0bCounterData\x12\x1f\n\nbyte_count\x18\x01\x20\
    \x01(\x03R\tbyteCountB\0\x12#\n\x0cpacket_count\x18\x02\x20\x01(\x03R\
    \x0bpacketCountB\0:\0\"\xca\x01\n\x1cPacketReplicationEngineEntry\x12R\n\
    \x15multicast_group_entry\x18\x01\x20\x01(\x0b2\x1a.p4.v1.MulticastGroup\
    EntryH\0R\x13multicastGroupEntryB\0\x12L\n\x13clone_session_entry\x18\
    \x02\x20\x01(\x0b2\x18.p4.v1.CloneSessionEntryH\0R\x11cloneSessionEntryB\
    \0B\x06\n\x04type:\0\"L\n\x07Replica\x12!\n\x0begress_port\x18\x01\x20\
    \x01(\rR\negressPortB\0\x12\x1c\n\x08instance\x18\x02\x20\x01(\rR\x08ins\
    tanceB\0:\0\"u\n\x13MulticastGroupEntry\x12.\n\x12multicast_group_id\x18\
    \x01\x20\x01(\rR\x10multicastGroupIdB\0\x12,\n\x08replicas\x18\x02\x20\
    \x03(\x0b2\x0e.p4.v1.ReplicaR\x08replicasB\0:\0\"\xc2\x01\n\x11CloneSess\
    ionEntry\x12\x1f\n\nsession_id\x18\x01\x20\x01(\rR\tsessionIdB\0\x12,\n\
    \x08replicas\x18\x02\x20\x03(\x0b2\x0e.p4.v1.ReplicaR\x08replicasB\0\x12\
    *\n\x10class_of_service\x18\x03\x20\x01(\rR\x0eclassOfServiceB\0\x120\n\
    \x13packet_length_bytes\x18\x04\x20\x01(\x05R\x11packetLengthBytesB\0:\0\
    \"\xe6\x01\n\x0bDigestEntry\x12\x1d\n\tdigest_id\x18\x01\x20\x01(\rR\x08\
    digestIdB\0\x123\n\x06config\x18\x02\x20\x01(\x0b2\x19.p4.v1.DigestEntry\
    .ConfigR\x06configB\0\x1a\x80\x01\n\x06Config\x12&\n\x0emax_timeout_ns\
    \x18\x01\x20\x01(\x03R\x0cmaxTimeoutNsB\0\x12$\n\rmax_list_size\x18\x02\
    \x20\x01(\x05R\x0bmaxListSizeB\0\x12&\n\x0eack_timeout_ns\x18\x03\x20\
    \x01(\x03R\x0cackTimeoutNsB\0:\0:\0\"5\n\x07Uint128\x12\x14\n\x04high\
    \x18\x01\x20\x01(\x04R\x04highB\0\x12\x12\n\x03low\x18\x02\x20\x01(\x04R\
    \x03lowB\0:\0B\0b\x06proto3\
";

static file_descriptor_proto_lazy: ::protobuf::rt::LazyV2<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::LazyV2::INIT;

fn parse_descriptor_proto() -> ::protobuf::descriptor::FileDescriptorProto {
    ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
}

pub fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    file_descriptor_proto_lazy.get(|| {
        parse_descriptor_proto()
    })
}
