//! Prototype model: parameters, prototypes and the ordered prototype set.

use indexmap::{IndexMap, IndexSet};

use crate::ApiError;

/// Ordered set of type tokens that denote object handles.
///
/// Membership is plain token equality, so `VkDevice` is a handle while
/// `VkDevice*` and `const VkDevice` are not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handles(IndexSet<String>);

impl Handles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ty: &str) -> bool {
        self.0.contains(ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Handles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    ty: String,
    name: String,
    index: usize,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, index: usize) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            index,
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position within the owning prototype.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of pointer and array levels in the type token.
    pub fn indirection_level(&self) -> usize {
        self.ty.matches('*').count() + self.ty.matches('[').count()
    }

    /// Type token with every pointer/array level stripped.
    ///
    /// Returns `""` for a type without indirection. Qualifiers are kept:
    /// `const VkFence*` dereferences to `const VkFence`.
    pub fn dereferenced_type(&self) -> &str {
        let level = self.indirection_level();
        if level == 0 {
            return "";
        }
        let mut deref = self.ty.as_str();
        for _ in 0..level {
            let cut = deref.rfind('[').or_else(|| deref.rfind('*'));
            match cut {
                Some(idx) => deref = &deref[..idx],
                None => return "",
            }
        }
        deref.trim_end()
    }
}

/// A function prototype: return type, name and ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proto {
    ret: String,
    name: String,
    params: Vec<Param>,
}

impl Proto {
    pub fn new(ret: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ret: ret.into(),
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter; its index is its position.
    pub fn param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        let index = self.params.len();
        self.params.push(Param::new(ty, name, index));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ret(&self) -> &str {
        &self.ret
    }

    pub fn returns_void(&self) -> bool {
        self.ret == "void"
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn first_param(&self) -> Option<&Param> {
        self.params.first()
    }

    pub fn last_param(&self) -> Option<&Param> {
        self.params.last()
    }

    /// Parameter counted from the end: `param_from_end(1)` is the last one.
    pub fn param_from_end(&self, n: usize) -> Option<&Param> {
        self.params
            .len()
            .checked_sub(n)
            .and_then(|i| self.params.get(i))
    }

    /// Parameters whose type is an object handle, passed by value.
    pub fn object_in_params<'a>(
        &'a self,
        handles: &'a Handles,
    ) -> impl Iterator<Item = &'a Param> + 'a {
        self.params.iter().filter(move |p| handles.contains(p.ty()))
    }

    /// Parameters that point at object handles, i.e. handle outputs.
    pub fn object_out_params<'a>(
        &'a self,
        handles: &'a Handles,
    ) -> impl Iterator<Item = &'a Param> + 'a {
        self.params
            .iter()
            .filter(move |p| handles.contains(p.dereferenced_type()))
    }
}

/// The whole API surface: headers, handle types and prototypes in input order.
#[derive(Debug, Clone, Default)]
pub struct Api {
    headers: Vec<String>,
    handles: Handles,
    protos: IndexMap<String, Proto>,
}

impl Api {
    pub fn new(headers: Vec<String>, handles: Handles) -> Self {
        Self {
            headers,
            handles,
            protos: IndexMap::new(),
        }
    }

    /// Append a prototype, keeping input order.
    pub fn push(&mut self, proto: Proto) -> Result<(), ApiError> {
        if self.protos.contains_key(proto.name()) {
            return Err(ApiError::DuplicatePrototype(proto.name().to_string()));
        }
        self.protos.insert(proto.name().to_string(), proto);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn handles(&self) -> &Handles {
        &self.handles
    }

    /// Prototypes in input order.
    pub fn protos(&self) -> impl ExactSizeIterator<Item = &Proto> {
        self.protos.values()
    }

    /// Indexed lookup by prototype name.
    pub fn proto(&self, name: &str) -> Option<&Proto> {
        self.protos.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.protos.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.protos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protos.is_empty()
    }
}
