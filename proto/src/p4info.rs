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
//! Generated file from `p4/config/v1/p4info.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
// const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_2_28_0;

#[derive(PartialEq,Clone,Default)]
pub struct P4Info {
    // message fields
    pub pkg_info: ::protobuf::SingularPtrField<PkgInfo>,
    pub tables: ::protobuf::RepeatedField<Table>,
    pub actions: ::protobuf::RepeatedField<Action>,
    pub action_profiles: ::protobuf::RepeatedField<ActionProfile>,
    pub counters: ::protobuf::RepeatedField<Counter>,
    pub meters: ::protobuf::RepeatedField<Meter>,
    pub digests: ::protobuf::RepeatedField<Digest>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a P4Info {
    fn default() -> &'a P4Info {
        <P4Info as ::protobuf::Message>::default_instance()
    }
}

impl P4Info {
    pub fn new() -> P4Info {
        ::std::default::Default::default()
    }

    // .p4.config.v1.PkgInfo pkg_info = 1;


    pub fn get_pkg_info(&self) -> &PkgInfo {
        self.pkg_info.as_ref().unwrap_or_else(|| <PkgInfo as ::protobuf::Message>::default_instance())
    }
    pub fn clear_pkg_info(&mut self) {
        self.pkg_info.clear();
    }

    pub fn has_pkg_info(&self) -> bool {
        self.pkg_info.is_some()
    }

    // Param is passed by value, moved
    pub fn set_pkg_info(&mut self, v: PkgInfo) {
        self.pkg_info = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_pkg_info(&mut self) -> &mut PkgInfo {
        if self.pkg_info.is_none() {
            self.pkg_info.set_default();
        }
        self.pkg_info.as_mut().unwrap()
    }

    // Take field
    pub fn take_pkg_info(&mut self) -> PkgInfo {
        self.pkg_info.take().unwrap_or_else(|| PkgInfo::new())
    }

    // repeated .p4.config.v1.Table tables = 2;


    pub fn get_tables(&self) -> &[Table] {
        &self.tables
    }
    pub fn clear_tables(&mut self) {
        self.tables.clear();
    }

    // Param is passed by value, moved
    pub fn set_tables(&mut self, v: ::protobuf::RepeatedField<Table>) {
        self.tables = v;
    }

    // Mutable pointer to the field.
    pub fn mut_tables(&mut self) -> &mut ::protobuf::RepeatedField<Table> {
        &mut self.tables
    }

    // Take field
    pub fn take_tables(&mut self) -> ::protobuf::RepeatedField<Table> {
        ::std::mem::replace(&mut self.tables, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.Action actions = 3;


    pub fn get_actions(&self) -> &[Action] {
        &self.actions
    }
    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    // Param is passed by value, moved
    pub fn set_actions(&mut self, v: ::protobuf::RepeatedField<Action>) {
        self.actions = v;
    }

    // Mutable pointer to the field.
    pub fn mut_actions(&mut self) -> &mut ::protobuf::RepeatedField<Action> {
        &mut self.actions
    }

    // Take field
    pub fn take_actions(&mut self) -> ::protobuf::RepeatedField<Action> {
        ::std::mem::replace(&mut self.actions, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.ActionProfile action_profiles = 4;


    pub fn get_action_profiles(&self) -> &[ActionProfile] {
        &self.action_profiles
    }
    pub fn clear_action_profiles(&mut self) {
        self.action_profiles.clear();
    }

    // Param is passed by value, moved
    pub fn set_action_profiles(&mut self, v: ::protobuf::RepeatedField<ActionProfile>) {
        self.action_profiles = v;
    }

    // Mutable pointer to the field.
    pub fn mut_action_profiles(&mut self) -> &mut ::protobuf::RepeatedField<ActionProfile> {
        &mut self.action_profiles
    }

    // Take field
    pub fn take_action_profiles(&mut self) -> ::protobuf::RepeatedField<ActionProfile> {
        ::std::mem::replace(&mut self.action_profiles, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.Counter counters = 5;


    pub fn get_counters(&self) -> &[Counter] {
        &self.counters
    }
    pub fn clear_counters(&mut self) {
        self.counters.clear();
    }

    // Param is passed by value, moved
    pub fn set_counters(&mut self, v: ::protobuf::RepeatedField<Counter>) {
        self.counters = v;
    }

    // Mutable pointer to the field.
    pub fn mut_counters(&mut self) -> &mut ::protobuf::RepeatedField<Counter> {
        &mut self.counters
    }

    // Take field
    pub fn take_counters(&mut self) -> ::protobuf::RepeatedField<Counter> {
        ::std::mem::replace(&mut self.counters, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.Meter meters = 7;


    pub fn get_meters(&self) -> &[Meter] {
        &self.meters
    }
    pub fn clear_meters(&mut self) {
        self.meters.clear();
    }

    // Param is passed by value, moved
    pub fn set_meters(&mut self, v: ::protobuf::RepeatedField<Meter>) {
        self.meters = v;
    }

    // Mutable pointer to the field.
    pub fn mut_meters(&mut self) -> &mut ::protobuf::RepeatedField<Meter> {
        &mut self.meters
    }

    // Take field
    pub fn take_meters(&mut self) -> ::protobuf::RepeatedField<Meter> {
        ::std::mem::replace(&mut self.meters, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.Digest digests = 12;


    pub fn get_digests(&self) -> &[Digest] {
        &self.digests
    }
    pub fn clear_digests(&mut self) {
        self.digests.clear();
    }

    // Param is passed by value, moved
    pub fn set_digests(&mut self, v: ::protobuf::RepeatedField<Digest>) {
        self.digests = v;
    }

    // Mutable pointer to the field.
    pub fn mut_digests(&mut self) -> &mut ::protobuf::RepeatedField<Digest> {
        &mut self.digests
    }

    // Take field
    pub fn take_digests(&mut self) -> ::protobuf::RepeatedField<Digest> {
        ::std::mem::replace(&mut self.digests, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for P4Info {
    fn is_initialized(&self) -> bool {
        for v in &self.pkg_info {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.tables {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.actions {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.action_profiles {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.counters {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.meters {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.digests {
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
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.pkg_info)?;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.tables)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.actions)?;
                },
                4 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.action_profiles)?;
                },
                5 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.counters)?;
                },
                7 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.meters)?;
                },
                12 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.digests)?;
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
        if let Some(ref v) = self.pkg_info.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.tables {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.actions {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.action_profiles {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.counters {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.meters {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.digests {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.pkg_info.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.tables {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.actions {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.action_profiles {
            os.write_tag(4, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.counters {
            os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.meters {
            os.write_tag(7, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.digests {
            os.write_tag(12, ::protobuf::wire_format::WireTypeLengthDelimited)?;
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

    fn new() -> P4Info {
        P4Info::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<PkgInfo>>(
                "pkg_info",
                |m: &P4Info| { &m.pkg_info },
                |m: &mut P4Info| { &mut m.pkg_info },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Table>>(
                "tables",
                |m: &P4Info| { &m.tables },
                |m: &mut P4Info| { &mut m.tables },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Action>>(
                "actions",
                |m: &P4Info| { &m.actions },
                |m: &mut P4Info| { &mut m.actions },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ActionProfile>>(
                "action_profiles",
                |m: &P4Info| { &m.action_profiles },
                |m: &mut P4Info| { &mut m.action_profiles },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Counter>>(
                "counters",
                |m: &P4Info| { &m.counters },
                |m: &mut P4Info| { &mut m.counters },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Meter>>(
                "meters",
                |m: &P4Info| { &m.meters },
                |m: &mut P4Info| { &mut m.meters },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Digest>>(
                "digests",
                |m: &P4Info| { &m.digests },
                |m: &mut P4Info| { &mut m.digests },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<P4Info>(
                "P4Info",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static P4Info {
        static instance: ::protobuf::rt::LazyV2<P4Info> = ::protobuf::rt::LazyV2::INIT;
        instance.get(P4Info::new)
    }
}

impl ::protobuf::Clear for P4Info {
    fn clear(&mut self) {
        self.pkg_info.clear();
        self.tables.clear();
        self.actions.clear();
        self.action_profiles.clear();
        self.counters.clear();
        self.meters.clear();
        self.digests.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for P4Info {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for P4Info {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct PkgInfo {
    // message fields
    pub name: ::std::string::String,
    pub version: ::std::string::String,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    pub arch: ::std::string::String,
    pub organization: ::std::string::String,
    pub contact: ::std::string::String,
    pub url: ::std::string::String,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a PkgInfo {
    fn default() -> &'a PkgInfo {
        <PkgInfo as ::protobuf::Message>::default_instance()
    }
}

impl PkgInfo {
    pub fn new() -> PkgInfo {
        ::std::default::Default::default()
    }

    // string name = 1;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // string version = 2;


    pub fn get_version(&self) -> &str {
        &self.version
    }
    pub fn clear_version(&mut self) {
        self.version.clear();
    }

    // Param is passed by value, moved
    pub fn set_version(&mut self, v: ::std::string::String) {
        self.version = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_version(&mut self) -> &mut ::std::string::String {
        &mut self.version
    }

    // Take field
    pub fn take_version(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.version, ::std::string::String::new())
    }

    // repeated string annotations = 4;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }

    // string arch = 5;


    pub fn get_arch(&self) -> &str {
        &self.arch
    }
    pub fn clear_arch(&mut self) {
        self.arch.clear();
    }

    // Param is passed by value, moved
    pub fn set_arch(&mut self, v: ::std::string::String) {
        self.arch = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_arch(&mut self) -> &mut ::std::string::String {
        &mut self.arch
    }

    // Take field
    pub fn take_arch(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.arch, ::std::string::String::new())
    }

    // string organization = 6;


    pub fn get_organization(&self) -> &str {
        &self.organization
    }
    pub fn clear_organization(&mut self) {
        self.organization.clear();
    }

    // Param is passed by value, moved
    pub fn set_organization(&mut self, v: ::std::string::String) {
        self.organization = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_organization(&mut self) -> &mut ::std::string::String {
        &mut self.organization
    }

    // Take field
    pub fn take_organization(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.organization, ::std::string::String::new())
    }

    // string contact = 7;


    pub fn get_contact(&self) -> &str {
        &self.contact
    }
    pub fn clear_contact(&mut self) {
        self.contact.clear();
    }

    // Param is passed by value, moved
    pub fn set_contact(&mut self, v: ::std::string::String) {
        self.contact = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_contact(&mut self) -> &mut ::std::string::String {
        &mut self.contact
    }

    // Take field
    pub fn take_contact(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.contact, ::std::string::String::new())
    }

    // string url = 8;


    pub fn get_url(&self) -> &str {
        &self.url
    }
    pub fn clear_url(&mut self) {
        self.url.clear();
    }

    // Param is passed by value, moved
    pub fn set_url(&mut self, v: ::std::string::String) {
        self.url = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_url(&mut self) -> &mut ::std::string::String {
        &mut self.url
    }

    // Take field
    pub fn take_url(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.url, ::std::string::String::new())
    }
}

impl ::protobuf::Message for PkgInfo {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.version)?;
                },
                4 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                5 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.arch)?;
                },
                6 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.organization)?;
                },
                7 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.contact)?;
                },
                8 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.url)?;
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
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.name);
        }
        if !self.version.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.version);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(4, &value);
        };
        if !self.arch.is_empty() {
            my_size += ::protobuf::rt::string_size(5, &self.arch);
        }
        if !self.organization.is_empty() {
            my_size += ::protobuf::rt::string_size(6, &self.organization);
        }
        if !self.contact.is_empty() {
            my_size += ::protobuf::rt::string_size(7, &self.contact);
        }
        if !self.url.is_empty() {
            my_size += ::protobuf::rt::string_size(8, &self.url);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.name.is_empty() {
            os.write_string(1, &self.name)?;
        }
        if !self.version.is_empty() {
            os.write_string(2, &self.version)?;
        }
        for v in &self.annotations {
            os.write_string(4, &v)?;
        };
        if !self.arch.is_empty() {
            os.write_string(5, &self.arch)?;
        }
        if !self.organization.is_empty() {
            os.write_string(6, &self.organization)?;
        }
        if !self.contact.is_empty() {
            os.write_string(7, &self.contact)?;
        }
        if !self.url.is_empty() {
            os.write_string(8, &self.url)?;
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

    fn new() -> PkgInfo {
        PkgInfo::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &PkgInfo| { &m.name },
                |m: &mut PkgInfo| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "version",
                |m: &PkgInfo| { &m.version },
                |m: &mut PkgInfo| { &mut m.version },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &PkgInfo| { &m.annotations },
                |m: &mut PkgInfo| { &mut m.annotations },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "arch",
                |m: &PkgInfo| { &m.arch },
                |m: &mut PkgInfo| { &mut m.arch },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "organization",
                |m: &PkgInfo| { &m.organization },
                |m: &mut PkgInfo| { &mut m.organization },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "contact",
                |m: &PkgInfo| { &m.contact },
                |m: &mut PkgInfo| { &mut m.contact },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "url",
                |m: &PkgInfo| { &m.url },
                |m: &mut PkgInfo| { &mut m.url },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<PkgInfo>(
                "PkgInfo",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static PkgInfo {
        static instance: ::protobuf::rt::LazyV2<PkgInfo> = ::protobuf::rt::LazyV2::INIT;
        instance.get(PkgInfo::new)
    }
}

impl ::protobuf::Clear for PkgInfo {
    fn clear(&mut self) {
        self.name.clear();
        self.version.clear();
        self.annotations.clear();
        self.arch.clear();
        self.organization.clear();
        self.contact.clear();
        self.url.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for PkgInfo {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for PkgInfo {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Preamble {
    // message fields
    pub id: u32,
    pub name: ::std::string::String,
    pub alias: ::std::string::String,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Preamble {
    fn default() -> &'a Preamble {
        <Preamble as ::protobuf::Message>::default_instance()
    }
}

impl Preamble {
    pub fn new() -> Preamble {
        ::std::default::Default::default()
    }

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // string name = 2;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // string alias = 3;


    pub fn get_alias(&self) -> &str {
        &self.alias
    }
    pub fn clear_alias(&mut self) {
        self.alias.clear();
    }

    // Param is passed by value, moved
    pub fn set_alias(&mut self, v: ::std::string::String) {
        self.alias = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_alias(&mut self) -> &mut ::std::string::String {
        &mut self.alias
    }

    // Take field
    pub fn take_alias(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.alias, ::std::string::String::new())
    }

    // repeated string annotations = 4;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for Preamble {
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
                    self.id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.alias)?;
                },
                4 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
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
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.name);
        }
        if !self.alias.is_empty() {
            my_size += ::protobuf::rt::string_size(3, &self.alias);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(4, &value);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if !self.name.is_empty() {
            os.write_string(2, &self.name)?;
        }
        if !self.alias.is_empty() {
            os.write_string(3, &self.alias)?;
        }
        for v in &self.annotations {
            os.write_string(4, &v)?;
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

    fn new() -> Preamble {
        Preamble::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "id",
                |m: &Preamble| { &m.id },
                |m: &mut Preamble| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &Preamble| { &m.name },
                |m: &mut Preamble| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "alias",
                |m: &Preamble| { &m.alias },
                |m: &mut Preamble| { &mut m.alias },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &Preamble| { &m.annotations },
                |m: &mut Preamble| { &mut m.annotations },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Preamble>(
                "Preamble",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Preamble {
        static instance: ::protobuf::rt::LazyV2<Preamble> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Preamble::new)
    }
}

impl ::protobuf::Clear for Preamble {
    fn clear(&mut self) {
        self.id = 0;
        self.name.clear();
        self.alias.clear();
        self.annotations.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Preamble {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Preamble {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct MatchField {
    // message fields
    pub id: u32,
    pub name: ::std::string::String,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    pub bitwidth: i32,
    // message oneof groups
    pub field_match: ::std::option::Option<MatchField_oneof_match>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a MatchField {
    fn default() -> &'a MatchField {
        <MatchField as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum MatchField_oneof_match {
    match_type(MatchField_MatchType),
    other_match_type(::std::string::String),
}

impl MatchField {
    pub fn new() -> MatchField {
        ::std::default::Default::default()
    }

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // string name = 2;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // repeated string annotations = 3;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }

    // int32 bitwidth = 4;


    pub fn get_bitwidth(&self) -> i32 {
        self.bitwidth
    }
    pub fn clear_bitwidth(&mut self) {
        self.bitwidth = 0;
    }

    // Param is passed by value, moved
    pub fn set_bitwidth(&mut self, v: i32) {
        self.bitwidth = v;
    }

    // .p4.config.v1.MatchField.MatchType match_type = 5;


    pub fn get_match_type(&self) -> MatchField_MatchType {
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::match_type(v)) => v,
            _ => MatchField_MatchType::UNSPECIFIED,
        }
    }
    pub fn clear_match_type(&mut self) {
        self.field_match = ::std::option::Option::None;
    }

    pub fn has_match_type(&self) -> bool {
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::match_type(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_match_type(&mut self, v: MatchField_MatchType) {
        self.field_match = ::std::option::Option::Some(MatchField_oneof_match::match_type(v))
    }

    // string other_match_type = 7;


    pub fn get_other_match_type(&self) -> &str {
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::other_match_type(ref v)) => v,
            _ => "",
        }
    }
    pub fn clear_other_match_type(&mut self) {
        self.field_match = ::std::option::Option::None;
    }

    pub fn has_other_match_type(&self) -> bool {
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::other_match_type(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_other_match_type(&mut self, v: ::std::string::String) {
        self.field_match = ::std::option::Option::Some(MatchField_oneof_match::other_match_type(v))
    }

    // Mutable pointer to the field.
    pub fn mut_other_match_type(&mut self) -> &mut ::std::string::String {
        if let ::std::option::Option::Some(MatchField_oneof_match::other_match_type(_)) = self.field_match {
        } else {
            self.field_match = ::std::option::Option::Some(MatchField_oneof_match::other_match_type(::std::string::String::new()));
        }
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::other_match_type(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_other_match_type(&mut self) -> ::std::string::String {
        if self.has_other_match_type() {
            match self.field_match.take() {
                ::std::option::Option::Some(MatchField_oneof_match::other_match_type(v)) => v,
                _ => panic!(),
            }
        } else {
            ::std::string::String::new()
        }
    }
}

impl ::protobuf::Message for MatchField {
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
                    self.id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.bitwidth = tmp;
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match = ::std::option::Option::Some(MatchField_oneof_match::match_type(is.read_enum()?));
                },
                7 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match = ::std::option::Option::Some(MatchField_oneof_match::other_match_type(is.read_string()?));
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
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.name);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(3, &value);
        };
        if self.bitwidth != 0 {
            my_size += ::protobuf::rt::value_size(4, self.bitwidth, ::protobuf::wire_format::WireTypeVarint);
        }
        if let ::std::option::Option::Some(ref v) = self.field_match {
            match v {
                &MatchField_oneof_match::match_type(v) => {
                    my_size += ::protobuf::rt::enum_size(5, v);
                },
                &MatchField_oneof_match::other_match_type(ref v) => {
                    my_size += ::protobuf::rt::string_size(7, &v);
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if !self.name.is_empty() {
            os.write_string(2, &self.name)?;
        }
        for v in &self.annotations {
            os.write_string(3, &v)?;
        };
        if self.bitwidth != 0 {
            os.write_int32(4, self.bitwidth)?;
        }
        if let ::std::option::Option::Some(ref v) = self.field_match {
            match v {
                &MatchField_oneof_match::match_type(v) => {
                    os.write_enum(5, ::protobuf::ProtobufEnum::value(&v))?;
                },
                &MatchField_oneof_match::other_match_type(ref v) => {
                    os.write_string(7, v)?;
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

    fn new() -> MatchField {
        MatchField::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "id",
                |m: &MatchField| { &m.id },
                |m: &mut MatchField| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &MatchField| { &m.name },
                |m: &mut MatchField| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &MatchField| { &m.annotations },
                |m: &mut MatchField| { &mut m.annotations },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "bitwidth",
                |m: &MatchField| { &m.bitwidth },
                |m: &mut MatchField| { &mut m.bitwidth },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_enum_accessor::<_, MatchField_MatchType>(
                "match_type",
                MatchField::has_match_type,
                MatchField::get_match_type,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_string_accessor::<_>(
                "other_match_type",
                MatchField::has_other_match_type,
                MatchField::get_other_match_type,
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<MatchField>(
                "MatchField",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static MatchField {
        static instance: ::protobuf::rt::LazyV2<MatchField> = ::protobuf::rt::LazyV2::INIT;
        instance.get(MatchField::new)
    }
}

impl ::protobuf::Clear for MatchField {
    fn clear(&mut self) {
        self.id = 0;
        self.name.clear();
        self.annotations.clear();
        self.bitwidth = 0;
        self.field_match = ::std::option::Option::None;
        self.field_match = ::std::option::Option::None;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for MatchField {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MatchField {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum MatchField_MatchType {
    UNSPECIFIED = 0,
    EXACT = 2,
    LPM = 3,
    TERNARY = 4,
    RANGE = 5,
    OPTIONAL = 6,
}

impl ::protobuf::ProtobufEnum for MatchField_MatchType {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<MatchField_MatchType> {
        match value {
            0 => ::std::option::Option::Some(MatchField_MatchType::UNSPECIFIED),
            2 => ::std::option::Option::Some(MatchField_MatchType::EXACT),
            3 => ::std::option::Option::Some(MatchField_MatchType::LPM),
            4 => ::std::option::Option::Some(MatchField_MatchType::TERNARY),
            5 => ::std::option::Option::Some(MatchField_MatchType::RANGE),
            6 => ::std::option::Option::Some(MatchField_MatchType::OPTIONAL),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [MatchField_MatchType] = &[
            MatchField_MatchType::UNSPECIFIED,
            MatchField_MatchType::EXACT,
            MatchField_MatchType::LPM,
            MatchField_MatchType::TERNARY,
            MatchField_MatchType::RANGE,
            MatchField_MatchType::OPTIONAL,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<MatchField_MatchType>("MatchField.MatchType", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for MatchField_MatchType {
}

impl ::std::default::Default for MatchField_MatchType {
    fn default() -> Self {
        MatchField_MatchType::UNSPECIFIED
    }
}

impl ::protobuf::reflect::ProtobufValue for MatchField_MatchType {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Table {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
    pub match_fields: ::protobuf::RepeatedField<MatchField>,
    pub action_refs: ::protobuf::RepeatedField<ActionRef>,
    pub const_default_action_id: u32,
    pub implementation_id: u32,
    pub direct_resource_ids: ::std::vec::Vec<u32>,
    pub size: i64,
    pub idle_timeout_behavior: Table_IdleTimeoutBehavior,
    pub is_const_table: bool,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Table {
    fn default() -> &'a Table {
        <Table as ::protobuf::Message>::default_instance()
    }
}

impl Table {
    pub fn new() -> Table {
        ::std::default::Default::default()
    }

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }

    // repeated .p4.config.v1.MatchField match_fields = 2;


    pub fn get_match_fields(&self) -> &[MatchField] {
        &self.match_fields
    }
    pub fn clear_match_fields(&mut self) {
        self.match_fields.clear();
    }

    // Param is passed by value, moved
    pub fn set_match_fields(&mut self, v: ::protobuf::RepeatedField<MatchField>) {
        self.match_fields = v;
    }

    // Mutable pointer to the field.
    pub fn mut_match_fields(&mut self) -> &mut ::protobuf::RepeatedField<MatchField> {
        &mut self.match_fields
    }

    // Take field
    pub fn take_match_fields(&mut self) -> ::protobuf::RepeatedField<MatchField> {
        ::std::mem::replace(&mut self.match_fields, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.ActionRef action_refs = 3;


    pub fn get_action_refs(&self) -> &[ActionRef] {
        &self.action_refs
    }
    pub fn clear_action_refs(&mut self) {
        self.action_refs.clear();
    }

    // Param is passed by value, moved
    pub fn set_action_refs(&mut self, v: ::protobuf::RepeatedField<ActionRef>) {
        self.action_refs = v;
    }

    // Mutable pointer to the field.
    pub fn mut_action_refs(&mut self) -> &mut ::protobuf::RepeatedField<ActionRef> {
        &mut self.action_refs
    }

    // Take field
    pub fn take_action_refs(&mut self) -> ::protobuf::RepeatedField<ActionRef> {
        ::std::mem::replace(&mut self.action_refs, ::protobuf::RepeatedField::new())
    }

    // uint32 const_default_action_id = 4;


    pub fn get_const_default_action_id(&self) -> u32 {
        self.const_default_action_id
    }
    pub fn clear_const_default_action_id(&mut self) {
        self.const_default_action_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_const_default_action_id(&mut self, v: u32) {
        self.const_default_action_id = v;
    }

    // uint32 implementation_id = 6;


    pub fn get_implementation_id(&self) -> u32 {
        self.implementation_id
    }
    pub fn clear_implementation_id(&mut self) {
        self.implementation_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_implementation_id(&mut self, v: u32) {
        self.implementation_id = v;
    }

    // repeated uint32 direct_resource_ids = 7;


    pub fn get_direct_resource_ids(&self) -> &[u32] {
        &self.direct_resource_ids
    }
    pub fn clear_direct_resource_ids(&mut self) {
        self.direct_resource_ids.clear();
    }

    // Param is passed by value, moved
    pub fn set_direct_resource_ids(&mut self, v: ::std::vec::Vec<u32>) {
        self.direct_resource_ids = v;
    }

    // Mutable pointer to the field.
    pub fn mut_direct_resource_ids(&mut self) -> &mut ::std::vec::Vec<u32> {
        &mut self.direct_resource_ids
    }

    // Take field
    pub fn take_direct_resource_ids(&mut self) -> ::std::vec::Vec<u32> {
        ::std::mem::replace(&mut self.direct_resource_ids, ::std::vec::Vec::new())
    }

    // int64 size = 8;


    pub fn get_size(&self) -> i64 {
        self.size
    }
    pub fn clear_size(&mut self) {
        self.size = 0;
    }

    // Param is passed by value, moved
    pub fn set_size(&mut self, v: i64) {
        self.size = v;
    }

    // .p4.config.v1.Table.IdleTimeoutBehavior idle_timeout_behavior = 9;


    pub fn get_idle_timeout_behavior(&self) -> Table_IdleTimeoutBehavior {
        self.idle_timeout_behavior
    }
    pub fn clear_idle_timeout_behavior(&mut self) {
        self.idle_timeout_behavior = Table_IdleTimeoutBehavior::NO_TIMEOUT;
    }

    // Param is passed by value, moved
    pub fn set_idle_timeout_behavior(&mut self, v: Table_IdleTimeoutBehavior) {
        self.idle_timeout_behavior = v;
    }

    // bool is_const_table = 10;


    pub fn get_is_const_table(&self) -> bool {
        self.is_const_table
    }
    pub fn clear_is_const_table(&mut self) {
        self.is_const_table = false;
    }

    // Param is passed by value, moved
    pub fn set_is_const_table(&mut self, v: bool) {
        self.is_const_table = v;
    }
}

impl ::protobuf::Message for Table {
    fn is_initialized(&self) -> bool {
        for v in &self.preamble {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.match_fields {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.action_refs {
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
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.match_fields)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.action_refs)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.const_default_action_id = tmp;
                },
                6 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.implementation_id = tmp;
                },
                7 => {
                    ::protobuf::rt::read_repeated_uint32_into(wire_type, is, &mut self.direct_resource_ids)?;
                },
                8 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.size = tmp;
                },
                9 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.idle_timeout_behavior, 9, &mut self.unknown_fields)?
                },
                10 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.is_const_table = tmp;
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
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.match_fields {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.action_refs {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        if self.const_default_action_id != 0 {
            my_size += ::protobuf::rt::value_size(4, self.const_default_action_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.implementation_id != 0 {
            my_size += ::protobuf::rt::value_size(6, self.implementation_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.direct_resource_ids {
            my_size += ::protobuf::rt::value_size(7, *value, ::protobuf::wire_format::WireTypeVarint);
        };
        if self.size != 0 {
            my_size += ::protobuf::rt::value_size(8, self.size, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.idle_timeout_behavior != Table_IdleTimeoutBehavior::NO_TIMEOUT {
            my_size += ::protobuf::rt::enum_size(9, self.idle_timeout_behavior);
        }
        if self.is_const_table != false {
            my_size += 2;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.match_fields {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.action_refs {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        if self.const_default_action_id != 0 {
            os.write_uint32(4, self.const_default_action_id)?;
        }
        if self.implementation_id != 0 {
            os.write_uint32(6, self.implementation_id)?;
        }
        for v in &self.direct_resource_ids {
            os.write_uint32(7, *v)?;
        };
        if self.size != 0 {
            os.write_int64(8, self.size)?;
        }
        if self.idle_timeout_behavior != Table_IdleTimeoutBehavior::NO_TIMEOUT {
            os.write_enum(9, ::protobuf::ProtobufEnum::value(&self.idle_timeout_behavior))?;
        }
        if self.is_const_table != false {
            os.write_bool(10, self.is_const_table)?;
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

    fn new() -> Table {
        Table::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &Table| { &m.preamble },
                |m: &mut Table| { &mut m.preamble },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<MatchField>>(
                "match_fields",
                |m: &Table| { &m.match_fields },
                |m: &mut Table| { &mut m.match_fields },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ActionRef>>(
                "action_refs",
                |m: &Table| { &m.action_refs },
                |m: &mut Table| { &mut m.action_refs },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "const_default_action_id",
                |m: &Table| { &m.const_default_action_id },
                |m: &mut Table| { &mut m.const_default_action_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "implementation_id",
                |m: &Table| { &m.implementation_id },
                |m: &mut Table| { &mut m.implementation_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_vec_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "direct_resource_ids",
                |m: &Table| { &m.direct_resource_ids },
                |m: &mut Table| { &mut m.direct_resource_ids },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "size",
                |m: &Table| { &m.size },
                |m: &mut Table| { &mut m.size },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<Table_IdleTimeoutBehavior>>(
                "idle_timeout_behavior",
                |m: &Table| { &m.idle_timeout_behavior },
                |m: &mut Table| { &mut m.idle_timeout_behavior },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "is_const_table",
                |m: &Table| { &m.is_const_table },
                |m: &mut Table| { &mut m.is_const_table },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Table>(
                "Table",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Table {
        static instance: ::protobuf::rt::LazyV2<Table> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Table::new)
    }
}

impl ::protobuf::Clear for Table {
    fn clear(&mut self) {
        self.preamble.clear();
        self.match_fields.clear();
        self.action_refs.clear();
        self.const_default_action_id = 0;
        self.implementation_id = 0;
        self.direct_resource_ids.clear();
        self.size = 0;
        self.idle_timeout_behavior = Table_IdleTimeoutBehavior::NO_TIMEOUT;
        self.is_const_table = false;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Table {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Table {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum Table_IdleTimeoutBehavior {
    NO_TIMEOUT = 0,
    NOTIFY_CONTROL = 1,
}

impl ::protobuf::ProtobufEnum for Table_IdleTimeoutBehavior {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<Table_IdleTimeoutBehavior> {
        match value {
            0 => ::std::option::Option::Some(Table_IdleTimeoutBehavior::NO_TIMEOUT),
            1 => ::std::option::Option::Some(Table_IdleTimeoutBehavior::NOTIFY_CONTROL),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [Table_IdleTimeoutBehavior] = &[
            Table_IdleTimeoutBehavior::NO_TIMEOUT,
            Table_IdleTimeoutBehavior::NOTIFY_CONTROL,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<Table_IdleTimeoutBehavior>("Table.IdleTimeoutBehavior", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for Table_IdleTimeoutBehavior {
}

impl ::std::default::Default for Table_IdleTimeoutBehavior {
    fn default() -> Self {
        Table_IdleTimeoutBehavior::NO_TIMEOUT
    }
}

impl ::protobuf::reflect::ProtobufValue for Table_IdleTimeoutBehavior {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ActionRef {
    // message fields
    pub id: u32,
    pub scope: ActionRef_Scope,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ActionRef {
    fn default() -> &'a ActionRef {
        <ActionRef as ::protobuf::Message>::default_instance()
    }
}

impl ActionRef {
    pub fn new() -> ActionRef {
        ::std::default::Default::default()
    }

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // .p4.config.v1.ActionRef.Scope scope = 3;


    pub fn get_scope(&self) -> ActionRef_Scope {
        self.scope
    }
    pub fn clear_scope(&mut self) {
        self.scope = ActionRef_Scope::TABLE_AND_DEFAULT;
    }

    // Param is passed by value, moved
    pub fn set_scope(&mut self, v: ActionRef_Scope) {
        self.scope = v;
    }

    // repeated string annotations = 2;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for ActionRef {
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
                    self.id = tmp;
                },
                3 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.scope, 3, &mut self.unknown_fields)?
                },
                2 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
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
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.scope != ActionRef_Scope::TABLE_AND_DEFAULT {
            my_size += ::protobuf::rt::enum_size(3, self.scope);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(2, &value);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if self.scope != ActionRef_Scope::TABLE_AND_DEFAULT {
            os.write_enum(3, ::protobuf::ProtobufEnum::value(&self.scope))?;
        }
        for v in &self.annotations {
            os.write_string(2, &v)?;
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

    fn new() -> ActionRef {
        ActionRef::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "id",
                |m: &ActionRef| { &m.id },
                |m: &mut ActionRef| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<ActionRef_Scope>>(
                "scope",
                |m: &ActionRef| { &m.scope },
                |m: &mut ActionRef| { &mut m.scope },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &ActionRef| { &m.annotations },
                |m: &mut ActionRef| { &mut m.annotations },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ActionRef>(
                "ActionRef",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ActionRef {
        static instance: ::protobuf::rt::LazyV2<ActionRef> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ActionRef::new)
    }
}

impl ::protobuf::Clear for ActionRef {
    fn clear(&mut self) {
        self.id = 0;
        self.scope = ActionRef_Scope::TABLE_AND_DEFAULT;
        self.annotations.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ActionRef {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ActionRef {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum ActionRef_Scope {
    TABLE_AND_DEFAULT = 0,
    TABLE_ONLY = 1,
    DEFAULT_ONLY = 2,
}

impl ::protobuf::ProtobufEnum for ActionRef_Scope {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<ActionRef_Scope> {
        match value {
            0 => ::std::option::Option::Some(ActionRef_Scope::TABLE_AND_DEFAULT),
            1 => ::std::option::Option::Some(ActionRef_Scope::TABLE_ONLY),
            2 => ::std::option::Option::Some(ActionRef_Scope::DEFAULT_ONLY),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [ActionRef_Scope] = &[
            ActionRef_Scope::TABLE_AND_DEFAULT,
            ActionRef_Scope::TABLE_ONLY,
            ActionRef_Scope::DEFAULT_ONLY,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<ActionRef_Scope>("ActionRef.Scope", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for ActionRef_Scope {
}

impl ::std::default::Default for ActionRef_Scope {
    fn default() -> Self {
        ActionRef_Scope::TABLE_AND_DEFAULT
    }
}

impl ::protobuf::reflect::ProtobufValue for ActionRef_Scope {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Action {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
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

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }

    // repeated .p4.config.v1.Action.Param params = 2;


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
        for v in &self.preamble {
            if !v.is_initialized() {
                return false;
            }
        };
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
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
                },
                2 => {
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
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
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
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.params {
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

    fn new() -> Action {
        Action::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &Action| { &m.preamble },
                |m: &mut Action| { &mut m.preamble },
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
        self.preamble.clear();
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
    pub id: u32,
    pub name: ::std::string::String,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    pub bitwidth: i32,
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

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // string name = 2;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // repeated string annotations = 3;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }

    // int32 bitwidth = 4;


    pub fn get_bitwidth(&self) -> i32 {
        self.bitwidth
    }
    pub fn clear_bitwidth(&mut self) {
        self.bitwidth = 0;
    }

    // Param is passed by value, moved
    pub fn set_bitwidth(&mut self, v: i32) {
        self.bitwidth = v;
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
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.bitwidth = tmp;
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
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.name);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(3, &value);
        };
        if self.bitwidth != 0 {
            my_size += ::protobuf::rt::value_size(4, self.bitwidth, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if !self.name.is_empty() {
            os.write_string(2, &self.name)?;
        }
        for v in &self.annotations {
            os.write_string(3, &v)?;
        };
        if self.bitwidth != 0 {
            os.write_int32(4, self.bitwidth)?;
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
                "id",
                |m: &Action_Param| { &m.id },
                |m: &mut Action_Param| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &Action_Param| { &m.name },
                |m: &mut Action_Param| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &Action_Param| { &m.annotations },
                |m: &mut Action_Param| { &mut m.annotations },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "bitwidth",
                |m: &Action_Param| { &m.bitwidth },
                |m: &mut Action_Param| { &mut m.bitwidth },
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
        self.id = 0;
        self.name.clear();
        self.annotations.clear();
        self.bitwidth = 0;
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
pub struct ActionProfile {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
    pub table_ids: ::std::vec::Vec<u32>,
    pub with_selector: bool,
    pub size: i64,
    pub max_group_size: i32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ActionProfile {
    fn default() -> &'a ActionProfile {
        <ActionProfile as ::protobuf::Message>::default_instance()
    }
}

impl ActionProfile {
    pub fn new() -> ActionProfile {
        ::std::default::Default::default()
    }

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }

    // repeated uint32 table_ids = 2;


    pub fn get_table_ids(&self) -> &[u32] {
        &self.table_ids
    }
    pub fn clear_table_ids(&mut self) {
        self.table_ids.clear();
    }

    // Param is passed by value, moved
    pub fn set_table_ids(&mut self, v: ::std::vec::Vec<u32>) {
        self.table_ids = v;
    }

    // Mutable pointer to the field.
    pub fn mut_table_ids(&mut self) -> &mut ::std::vec::Vec<u32> {
        &mut self.table_ids
    }

    // Take field
    pub fn take_table_ids(&mut self) -> ::std::vec::Vec<u32> {
        ::std::mem::replace(&mut self.table_ids, ::std::vec::Vec::new())
    }

    // bool with_selector = 3;


    pub fn get_with_selector(&self) -> bool {
        self.with_selector
    }
    pub fn clear_with_selector(&mut self) {
        self.with_selector = false;
    }

    // Param is passed by value, moved
    pub fn set_with_selector(&mut self, v: bool) {
        self.with_selector = v;
    }

    // int64 size = 4;


    pub fn get_size(&self) -> i64 {
        self.size
    }
    pub fn clear_size(&mut self) {
        self.size = 0;
    }

    // Param is passed by value, moved
    pub fn set_size(&mut self, v: i64) {
        self.size = v;
    }

    // int32 max_group_size = 5;


    pub fn get_max_group_size(&self) -> i32 {
        self.max_group_size
    }
    pub fn clear_max_group_size(&mut self) {
        self.max_group_size = 0;
    }

    // Param is passed by value, moved
    pub fn set_max_group_size(&mut self, v: i32) {
        self.max_group_size = v;
    }
}

impl ::protobuf::Message for ActionProfile {
    fn is_initialized(&self) -> bool {
        for v in &self.preamble {
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
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
                },
                2 => {
                    ::protobuf::rt::read_repeated_uint32_into(wire_type, is, &mut self.table_ids)?;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.with_selector = tmp;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.size = tmp;
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.max_group_size = tmp;
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
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.table_ids {
            my_size += ::protobuf::rt::value_size(2, *value, ::protobuf::wire_format::WireTypeVarint);
        };
        if self.with_selector != false {
            my_size += 2;
        }
        if self.size != 0 {
            my_size += ::protobuf::rt::value_size(4, self.size, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.max_group_size != 0 {
            my_size += ::protobuf::rt::value_size(5, self.max_group_size, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.table_ids {
            os.write_uint32(2, *v)?;
        };
        if self.with_selector != false {
            os.write_bool(3, self.with_selector)?;
        }
        if self.size != 0 {
            os.write_int64(4, self.size)?;
        }
        if self.max_group_size != 0 {
            os.write_int32(5, self.max_group_size)?;
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

    fn new() -> ActionProfile {
        ActionProfile::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &ActionProfile| { &m.preamble },
                |m: &mut ActionProfile| { &mut m.preamble },
            ));
            fields.push(::protobuf::reflect::accessor::make_vec_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "table_ids",
                |m: &ActionProfile| { &m.table_ids },
                |m: &mut ActionProfile| { &mut m.table_ids },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "with_selector",
                |m: &ActionProfile| { &m.with_selector },
                |m: &mut ActionProfile| { &mut m.with_selector },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "size",
                |m: &ActionProfile| { &m.size },
                |m: &mut ActionProfile| { &mut m.size },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "max_group_size",
                |m: &ActionProfile| { &m.max_group_size },
                |m: &mut ActionProfile| { &mut m.max_group_size },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ActionProfile>(
                "ActionProfile",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ActionProfile {
        static instance: ::protobuf::rt::LazyV2<ActionProfile> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ActionProfile::new)
    }
}

impl ::protobuf::Clear for ActionProfile {
    fn clear(&mut self) {
        self.preamble.clear();
        self.table_ids.clear();
        self.with_selector = false;
        self.size = 0;
        self.max_group_size = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ActionProfile {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ActionProfile {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct CounterSpec {
    // message fields
    pub unit: CounterSpec_Unit,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a CounterSpec {
    fn default() -> &'a CounterSpec {
        <CounterSpec as ::protobuf::Message>::default_instance()
    }
}

impl CounterSpec {
    pub fn new() -> CounterSpec {
        ::std::default::Default::default()
    }

    // .p4.config.v1.CounterSpec.Unit unit = 1;


    pub fn get_unit(&self) -> CounterSpec_Unit {
        self.unit
    }
    pub fn clear_unit(&mut self) {
        self.unit = CounterSpec_Unit::UNSPECIFIED;
    }

    // Param is passed by value, moved
    pub fn set_unit(&mut self, v: CounterSpec_Unit) {
        self.unit = v;
    }
}

impl ::protobuf::Message for CounterSpec {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.unit, 1, &mut self.unknown_fields)?
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
        if self.unit != CounterSpec_Unit::UNSPECIFIED {
            my_size += ::protobuf::rt::enum_size(1, self.unit);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.unit != CounterSpec_Unit::UNSPECIFIED {
            os.write_enum(1, ::protobuf::ProtobufEnum::value(&self.unit))?;
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

    fn new() -> CounterSpec {
        CounterSpec::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<CounterSpec_Unit>>(
                "unit",
                |m: &CounterSpec| { &m.unit },
                |m: &mut CounterSpec| { &mut m.unit },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<CounterSpec>(
                "CounterSpec",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static CounterSpec {
        static instance: ::protobuf::rt::LazyV2<CounterSpec> = ::protobuf::rt::LazyV2::INIT;
        instance.get(CounterSpec::new)
    }
}

impl ::protobuf::Clear for CounterSpec {
    fn clear(&mut self) {
        self.unit = CounterSpec_Unit::UNSPECIFIED;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for CounterSpec {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for CounterSpec {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum CounterSpec_Unit {
    UNSPECIFIED = 0,
    BYTES = 1,
    PACKETS = 2,
    BOTH = 3,
}

impl ::protobuf::ProtobufEnum for CounterSpec_Unit {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<CounterSpec_Unit> {
        match value {
            0 => ::std::option::Option::Some(CounterSpec_Unit::UNSPECIFIED),
            1 => ::std::option::Option::Some(CounterSpec_Unit::BYTES),
            2 => ::std::option::Option::Some(CounterSpec_Unit::PACKETS),
            3 => ::std::option::Option::Some(CounterSpec_Unit::BOTH),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [CounterSpec_Unit] = &[
            CounterSpec_Unit::UNSPECIFIED,
            CounterSpec_Unit::BYTES,
            CounterSpec_Unit::PACKETS,
            CounterSpec_Unit::BOTH,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<CounterSpec_Unit>("CounterSpec.Unit", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for CounterSpec_Unit {
}

impl ::std::default::Default for CounterSpec_Unit {
    fn default() -> Self {
        CounterSpec_Unit::UNSPECIFIED
    }
}

impl ::protobuf::reflect::ProtobufValue for CounterSpec_Unit {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Counter {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
    pub spec: ::protobuf::SingularPtrField<CounterSpec>,
    pub size: i64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Counter {
    fn default() -> &'a Counter {
        <Counter as ::protobuf::Message>::default_instance()
    }
}

impl Counter {
    pub fn new() -> Counter {
        ::std::default::Default::default()
    }

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }

    // .p4.config.v1.CounterSpec spec = 2;


    pub fn get_spec(&self) -> &CounterSpec {
        self.spec.as_ref().unwrap_or_else(|| <CounterSpec as ::protobuf::Message>::default_instance())
    }
    pub fn clear_spec(&mut self) {
        self.spec.clear();
    }

    pub fn has_spec(&self) -> bool {
        self.spec.is_some()
    }

    // Param is passed by value, moved
    pub fn set_spec(&mut self, v: CounterSpec) {
        self.spec = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_spec(&mut self) -> &mut CounterSpec {
        if self.spec.is_none() {
            self.spec.set_default();
        }
        self.spec.as_mut().unwrap()
    }

    // Take field
    pub fn take_spec(&mut self) -> CounterSpec {
        self.spec.take().unwrap_or_else(|| CounterSpec::new())
    }

    // int64 size = 3;


    pub fn get_size(&self) -> i64 {
        self.size
    }
    pub fn clear_size(&mut self) {
        self.size = 0;
    }

    // Param is passed by value, moved
    pub fn set_size(&mut self, v: i64) {
        self.size = v;
    }
}

impl ::protobuf::Message for Counter {
    fn is_initialized(&self) -> bool {
        for v in &self.preamble {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.spec {
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
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.spec)?;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.size = tmp;
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
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.spec.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.size != 0 {
            my_size += ::protobuf::rt::value_size(3, self.size, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.spec.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.size != 0 {
            os.write_int64(3, self.size)?;
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

    fn new() -> Counter {
        Counter::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &Counter| { &m.preamble },
                |m: &mut Counter| { &mut m.preamble },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<CounterSpec>>(
                "spec",
                |m: &Counter| { &m.spec },
                |m: &mut Counter| { &mut m.spec },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "size",
                |m: &Counter| { &m.size },
                |m: &mut Counter| { &mut m.size },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Counter>(
                "Counter",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Counter {
        static instance: ::protobuf::rt::LazyV2<Counter> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Counter::new)
    }
}

impl ::protobuf::Clear for Counter {
    fn clear(&mut self) {
        self.preamble.clear();
        self.spec.clear();
        self.size = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Counter {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Counter {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct MeterSpec {
    // message fields
    pub unit: MeterSpec_Unit,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a MeterSpec {
    fn default() -> &'a MeterSpec {
        <MeterSpec as ::protobuf::Message>::default_instance()
    }
}

impl MeterSpec {
    pub fn new() -> MeterSpec {
        ::std::default::Default::default()
    }

    // .p4.config.v1.MeterSpec.Unit unit = 1;


    pub fn get_unit(&self) -> MeterSpec_Unit {
        self.unit
    }
    pub fn clear_unit(&mut self) {
        self.unit = MeterSpec_Unit::UNSPECIFIED;
    }

    // Param is passed by value, moved
    pub fn set_unit(&mut self, v: MeterSpec_Unit) {
        self.unit = v;
    }
}

impl ::protobuf::Message for MeterSpec {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.unit, 1, &mut self.unknown_fields)?
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
        if self.unit != MeterSpec_Unit::UNSPECIFIED {
            my_size += ::protobuf::rt::enum_size(1, self.unit);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.unit != MeterSpec_Unit::UNSPECIFIED {
            os.write_enum(1, ::protobuf::ProtobufEnum::value(&self.unit))?;
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

    fn new() -> MeterSpec {
        MeterSpec::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<MeterSpec_Unit>>(
                "unit",
                |m: &MeterSpec| { &m.unit },
                |m: &mut MeterSpec| { &mut m.unit },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<MeterSpec>(
                "MeterSpec",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static MeterSpec {
        static instance: ::protobuf::rt::LazyV2<MeterSpec> = ::protobuf::rt::LazyV2::INIT;
        instance.get(MeterSpec::new)
    }
}

impl ::protobuf::Clear for MeterSpec {
    fn clear(&mut self) {
        self.unit = MeterSpec_Unit::UNSPECIFIED;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for MeterSpec {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MeterSpec {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum MeterSpec_Unit {
    UNSPECIFIED = 0,
    BYTES = 1,
    PACKETS = 2,
}

impl ::protobuf::ProtobufEnum for MeterSpec_Unit {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<MeterSpec_Unit> {
        match value {
            0 => ::std::option::Option::Some(MeterSpec_Unit::UNSPECIFIED),
            1 => ::std::option::Option::Some(MeterSpec_Unit::BYTES),
            2 => ::std::option::Option::Some(MeterSpec_Unit::PACKETS),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [MeterSpec_Unit] = &[
            MeterSpec_Unit::UNSPECIFIED,
            MeterSpec_Unit::BYTES,
            MeterSpec_Unit::PACKETS,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<MeterSpec_Unit>("MeterSpec.Unit", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for MeterSpec_Unit {
}

impl ::std::default::Default for MeterSpec_Unit {
    fn default() -> Self {
        MeterSpec_Unit::UNSPECIFIED
    }
}

impl ::protobuf::reflect::ProtobufValue for MeterSpec_Unit {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Meter {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
    pub spec: ::protobuf::SingularPtrField<MeterSpec>,
    pub size: i64,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Meter {
    fn default() -> &'a Meter {
        <Meter as ::protobuf::Message>::default_instance()
    }
}

impl Meter {
    pub fn new() -> Meter {
        ::std::default::Default::default()
    }

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }

    // .p4.config.v1.MeterSpec spec = 2;


    pub fn get_spec(&self) -> &MeterSpec {
        self.spec.as_ref().unwrap_or_else(|| <MeterSpec as ::protobuf::Message>::default_instance())
    }
    pub fn clear_spec(&mut self) {
        self.spec.clear();
    }

    pub fn has_spec(&self) -> bool {
        self.spec.is_some()
    }

    // Param is passed by value, moved
    pub fn set_spec(&mut self, v: MeterSpec) {
        self.spec = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_spec(&mut self) -> &mut MeterSpec {
        if self.spec.is_none() {
            self.spec.set_default();
        }
        self.spec.as_mut().unwrap()
    }

    // Take field
    pub fn take_spec(&mut self) -> MeterSpec {
        self.spec.take().unwrap_or_else(|| MeterSpec::new())
    }

    // int64 size = 3;


    pub fn get_size(&self) -> i64 {
        self.size
    }
    pub fn clear_size(&mut self) {
        self.size = 0;
    }

    // Param is passed by value, moved
    pub fn set_size(&mut self, v: i64) {
        self.size = v;
    }
}

impl ::protobuf::Message for Meter {
    fn is_initialized(&self) -> bool {
        for v in &self.preamble {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.spec {
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
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.spec)?;
                },
                3 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.size = tmp;
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
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let Some(ref v) = self.spec.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if self.size != 0 {
            my_size += ::protobuf::rt::value_size(3, self.size, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let Some(ref v) = self.spec.as_ref() {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if self.size != 0 {
            os.write_int64(3, self.size)?;
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

    fn new() -> Meter {
        Meter::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &Meter| { &m.preamble },
                |m: &mut Meter| { &mut m.preamble },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<MeterSpec>>(
                "spec",
                |m: &Meter| { &m.spec },
                |m: &mut Meter| { &mut m.spec },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "size",
                |m: &Meter| { &m.size },
                |m: &mut Meter| { &mut m.size },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Meter>(
                "Meter",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Meter {
        static instance: ::protobuf::rt::LazyV2<Meter> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Meter::new)
    }
}

impl ::protobuf::Clear for Meter {
    fn clear(&mut self) {
        self.preamble.clear();
        self.spec.clear();
        self.size = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Meter {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Meter {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Digest {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Digest {
    fn default() -> &'a Digest {
        <Digest as ::protobuf::Message>::default_instance()
    }
}

impl Digest {
    pub fn new() -> Digest {
        ::std::default::Default::default()
    }

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }
}

impl ::protobuf::Message for Digest {
    fn is_initialized(&self) -> bool {
        for v in &self.preamble {
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
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
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
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
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

    fn new() -> Digest {
        Digest::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &Digest| { &m.preamble },
                |m: &mut Digest| { &mut m.preamble },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Digest>(
                "Digest",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Digest {
        static instance: ::protobuf::rt::LazyV2<Digest> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Digest::new)
    }
}

impl ::protobuf::Clear for Digest {
    fn clear(&mut self) {
        self.preamble.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Digest {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x19p4/config/v1/p4info.proto\x12\x0cp4.config.v1\"\xfd\x02\n\x06P4Inf\
    o\x122\n\x08pkg_info\x18\x01\x20\x01(\x0b2\x15.p4.config.v1.PkgInfoR\x07\
    pkgInfoB\0\x12-\n\x06tables\x18\x02\x20\x03(\x0b2\x13.p4.config.v1.Table\
    R\x06tablesB\0\x120\n\x07actions\x18\x03\x20\x03(\x0b2\x14.p4.config.v1.\
    ActionR\x07actionsB\0\x12F\n\x0faction_profiles\x18\x04\x20\x03(\x0b2\
    \x1b.p4.config.v1.ActionProfileR\x0eactionProfilesB\0\x123\n\x08counters\
    \x18\x05\x20\x03(\x0b2\x15.p4.config.v1.CounterR\x08countersB\0\x12-\n\
    \x06meters\x18\x07\x20\x03(\x0b2\x13.p4.config.v1.MeterR\x06metersB\0\
    \x120\n\x07digests\x18\x0c\x20\x03(\x0b2\x14.p4.config.v1.DigestR\x07dig\
    estsB\0:\0\"\xcd\x01\n\x07PkgInfo\x12\x14\n\x04name\x18\x01\x20\x01(\tR\
    \x04nameB\0\x12\x1a\n\x07version\x18\x02\x20\x01(\tR\x07versionB\0\x12\"\
    \n\x0bannotations\x18\x04\x20\x03(\tR\x0bannotationsB\0\x12\x14\n\x04arc\
    h\x18\x05\x20\x01(\tR\x04archB\0\x12$\n\x0corganization\x18\x06\x20\x01(\
    \tR\x0corganizationB\0\x12\x1a\n\x07contact\x18\x07\x20\x01(\tR\x07conta\
    ctB\0\x12\x12\n\x03url\x18\x08\x20\x01(\tR\x03urlB\0:\0\"p\n\x08Preamble\
    \x12\x10\n\x02id\x18\x01\x20\x01(\rR\x02idB\0\x12\x14\n\x04name\x18\x02\
    \x20\x01(\tR\x04nameB\0\x12\x16\n\x05alias\x18\x03\x20\x01(\tR\x05aliasB\
    \0\x12\"\n\x0bannotations\x18\x04\x20\x03(\tR\x0bannotationsB\0:\0\"\xd0\
    \x02\n\nMatchField\x12\x10\n\x02id\x18\x01\x20\x01(\rR\x02idB\0\x12\x14\
    \n\x04name\x18\x02\x20\x01(\tR\x04nameB\0\x12\"\n\x0bannotations\x18\x03\
    \x20\x03(\tR\x0bannotationsB\0\x12\x1c\n\x08bitwidth\x18\x04\x20\x01(\
    \x05R\x08bitwidthB\0\x12E\n\nmatch_type\x18\x05\x20\x01(\x0e2\".p4.confi\
    g.v1.MatchField.MatchTypeH\0R\tmatchTypeB\0\x12,\n\x10other_match_type\
    \x18\x07\x20\x01(\tH\0R\x0eotherMatchTypeB\0\"X\n\tMatchType\x12\x0f\n\
    \x0bUNSPECIFIED\x10\0\x12\t\n\x05EXACT\x10\x02\x12\x07\n\x03LPM\x10\x03\
    \x12\x0b\n\x07TERNARY\x10\x04\x12\t\n\x05RANGE\x10\x05\x12\x0c\n\x08OPTI\
    ONAL\x10\x06\x1a\0B\x07\n\x05match:\0\"\xae\x04\n\x05Table\x124\n\x08pre\
    amble\x18\x01\x20\x01(\x0b2\x16.p4.config.v1.PreambleR\x08preambleB\0\
    \x12=\n\x0cmatch_fields\x18\x02\x20\x03(\x0b2\x18.p4.config.v1.MatchFiel\
    dR\x0bmatchFieldsB\0\x12:\n\x0baction_refs\x18\x03\x20\x03(\x0b2\x17.p4.\
    config.v1.ActionRefR\nactionRefsB\0\x127\n\x17const_default_action_id\
    \x18\x04\x20\x01(\rR\x14constDefaultActionIdB\0\x12-\n\x11implementation\
    _id\x18\x06\x20\x01(\rR\x10implementationIdB\0\x120\n\x13direct_resource\
    _ids\x18\x07\x20\x03(\rR\x11directResourceIdsB\0\x12\x14\n\x04size\x18\
    \x08\x20\x01(\x03R\x04sizeB\0\x12]\n\x15idle_timeout_behavior\x18\t\x20\
    \x01(\x0e2'.p4.config.v1.Table.IdleTimeoutBehaviorR\x13idleTimeoutBehavi\
    orB\0\x12&\n\x0eis_const_table\x18\n\x20\x01(\x08R\x0cisConstTableB\0\";\
    \n\x13IdleTimeoutBehavior\x12\x0e\n\nNO_TIMEOUT\x10\0\x12\x12\n\x0eNOTIF\
    Y_CONTROL\x10\x01\x1a\0:\0\"\xbe\x01\n\tActionRef\x12\x10\n\x02id\x18\
    \x01\x20\x01(\rR\x02idB\0\x125\n\x05scope\x18\x03\x20\x01(\x0e2\x1d.p4.c\
    onfig.v1.ActionRef.ScopeR\x05scopeB\0\x12\"\n\x0bannotations\x18\x02\x20\
    \x03(\tR\x0bannotationsB\0\"B\n\x05Scope\x12\x15\n\x11TABLE_AND_DEFAULT\
    \x10\0\x12\x0e\n\nTABLE_ONLY\x10\x01\x12\x10\n\x0cDEFAULT_ONLY\x10\x02\
    \x1a\0:\0\"\xeb\x01\n\x06Action\x124\n\x08preamble\x18\x01\x20\x01(\x0b2\
    \x16.p4.config.v1.PreambleR\x08preambleB\0\x124\n\x06params\x18\x02\x20\
    \x03(\x0b2\x1a.p4.config.v1.Action.ParamR\x06paramsB\0\x1as\n\x05Param\
    \x12\x10\n\x02id\x18\x01\x20\x01(\rR\x02idB\0\x12\x14\n\x04name\x18\x02\
    \x20\x01(\tR\x04nameB\0\x12\"\n\x0bannotations\x18\x03\x20\x03(\tR\x0ban\
    notationsB\0\x12\x1c\n\x08bitwidth\x18\x04\x20\x01(\x05R\x08bitwidthB\0:\
    \0:\0\"\xcb\x01\n\rActionProfile\x124\n\x08preamble\x18\x01\x20\x01(\x0b\
    2\x16.p4.config.v1.PreambleR\x08preambleB\0\x12\x1d\n\ttable_ids\x18\x02\
    \x20\x03(\rR\x08tableIdsB\0\x12%\n\rwith_selector\x18\x03\x20\x01(\x08R\
    \x0cwithSelectorB\0\x12\x14\n\x04size\x18\x04\x20\x01(\x03R\x04sizeB\0\
    \x12&\n\x0emax_group_size\x18\x05\x20\x01(\x05R\x0cmaxGroupSizeB\0:\0\"\
    \x82\x01\n\x0bCounterSpec\x124\n\x04unit\x18\x01\x20\x01(\x0e2\x1e.p4.co\
    nfig.v1.CounterSpec.UnitR\x04unitB\0\";\n\x04Unit\x12\x0f\n\x0bUNSPECIFI\
    ED\x10\0\x12\t\n\x05BYTES\x10\x01\x12\x0b\n\x07PACKETS\x10\x02\x12\x08\n\
    \x04BOTH\x10\x03\x1a\0:\0\"\x88\x01\n\x07Counter\x124\n\x08preamble\x18\
    \x01\x20\x01(\x0b2\x16.p4.config.v1.PreambleR\x08preambleB\0\x12/\n\x04s\
    pec\x18\x02\x20\x01(\x0b2\x19.p4.config.v1.CounterSpecR\x04specB\0\x12\
    \x14\n\x04size\x18\x03\x20\x01(\x03R\x04sizeB\0:\0\"t\n\tMeterSpec\x122\
    \n\x04unit\x18\x01\x20\x01(\x0e2\x1c.p4.config.v1.MeterSpec.UnitR\x04uni\
    tB\0\"1\n\x04Unit\x12\x0f\n\x0bUNSPECIFIED\x10\0\x12\t\n\x05BYTES\x10\
    \x01\x12\x0b\n\x07PACKETS\x10\x02\x1a\0:\0\"\x84\x01\n\x05Meter\x124\n\
    \x08preamble\x18\x01\x20\x01(\x0b2\x16.p4.config.v1.PreambleR\x08preambl\
    eB\0\x12-\n\x04spec\x18\x02\x20\x01(\x0b2\x17.p4.config.v1.MeterSpecR\
    \x04specB\0\x12\x14\n\x04size\x18\x03\x20\x01(\x03R\x04sizeB\0:\0\"@\n\
    \x06Digest\x124\n\x08preamble\x18\x01\x20\x01(\x0b2\x16.p4.config.v1.Pre\
    ambleR\x08preambleB\0:\0B\0b\x06proto3\
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
