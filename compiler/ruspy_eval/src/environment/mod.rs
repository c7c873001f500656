//! Variable scoping.
//!
//! Scopes live in one arena (`Vec<Scope>`) and refer to their parent by
//! [`ScopeId`]. A closure holds a [`ScopeRef`] to the scope it was created
//! in; closures that share a captured scope see each other's writes.
//!
//! Scopes are pushed for blocks, calls and loop iterations. Leaving a scope
//! that no closure could reach frees its slot at once. A scope a closure
//! captured (or an ancestor of one) is *pinned*: it outlives the frame
//! that created it and is freed by [`Environment::collect`] once no live
//! value can reach it. Freed slots are reused.
//!
//! Collection roots are the active frames plus every scope whose
//! [`ScopeRef`] count exceeds the references found in scope bindings, i.e.
//! closures held by the evaluator's temporaries or by the embedding host.
//! This also frees cycles such as a nested `fn` stored in the scope it
//! captures.

use std::fmt;
use std::sync::{Arc, Weak};

use rustc_hash::FxHashMap;

use ruspy_ir::Name;

use crate::Value;

/// Pinned scopes left since the last collection before another runs.
const MIN_COLLECTION_INTERVAL: usize = 256;

/// Index of a scope in the [`Environment`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The global scope: prelude builtins and module functions.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct ScopeAnchor {
    id: ScopeId,
}

/// A counted handle on a captured scope, held by function values.
///
/// Every closure created in the same scope shares one anchor, so the
/// handle count tells [`Environment::collect`] how many values hold the
/// scope.
#[derive(Clone)]
pub struct ScopeRef(Arc<ScopeAnchor>);

impl ScopeRef {
    /// Handle on the global scope, which is never freed.
    pub fn global() -> Self {
        ScopeRef(Arc::new(ScopeAnchor { id: ScopeId::GLOBAL }))
    }

    #[inline]
    pub fn id(&self) -> ScopeId {
        self.0.id
    }
}

impl PartialEq for ScopeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ScopeRef {}

impl fmt::Debug for ScopeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeRef({})", self.id().0)
    }
}

#[derive(Debug, Default)]
struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<ScopeId>,
    /// Shared by every [`ScopeRef`] to this scope while any is alive.
    anchor: Option<Weak<ScopeAnchor>>,
    /// A closure holds this scope or a descendant; only a collection
    /// frees it. Ancestors of a pinned scope are pinned.
    pinned: bool,
    live: bool,
}

impl Scope {
    fn with_parent(parent: ScopeId) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
            anchor: None,
            pinned: false,
            live: true,
        }
    }

    fn global() -> Self {
        Scope {
            live: true,
            ..Scope::default()
        }
    }

    /// Scopes named by function values bound here.
    fn captured_scopes(&self) -> impl Iterator<Item = ScopeId> + '_ {
        self.bindings.values().filter_map(|value| match value {
            Value::Function(func) => Some(func.captured.id()),
            _ => None,
        })
    }
}

/// Arena of scopes plus the scope evaluation is currently in.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    free: Vec<ScopeId>,
    current: ScopeId,
    /// Scopes to return to, innermost last; with `current` these are the
    /// active frames.
    frames: Vec<ScopeId>,
    /// Pinned scopes left since the last collection.
    pending: usize,
    next_collection: usize,
}

impl Environment {
    /// An environment holding only the (empty) global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::global()],
            free: Vec::new(),
            current: ScopeId::GLOBAL,
            frames: Vec::new(),
            pending: 0,
            next_collection: MIN_COLLECTION_INTERVAL,
        }
    }

    #[inline]
    pub fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of scopes in use, the global scope included.
    pub fn scope_count(&self) -> usize {
        self.scopes.len() - self.free.len()
    }

    /// Look `name` up from the current scope outward.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut scope = Some(self.current);
        while let Some(id) = scope {
            let slot = &self.scopes[id.index()];
            if let Some(value) = slot.bindings.get(&name) {
                return Some(value.clone());
            }
            scope = slot.parent;
        }
        None
    }

    /// Bind `name` in the current scope, shadowing any outer binding.
    pub fn define(&mut self, name: Name, value: Value) {
        let current = self.current;
        self.scopes[current.index()].bindings.insert(name, value);
    }

    /// Bind `name` in the global scope.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.scopes[ScopeId::GLOBAL.index()]
            .bindings
            .insert(name, value);
    }

    /// Rebind `name` in the nearest scope that owns it; if none does,
    /// create it in the current scope.
    pub fn assign(&mut self, name: Name, value: Value) {
        let mut scope = Some(self.current);
        while let Some(id) = scope {
            let slot = &mut self.scopes[id.index()];
            if let Some(binding) = slot.bindings.get_mut(&name) {
                *binding = value;
                return;
            }
            scope = slot.parent;
        }
        self.define(name, value);
    }

    /// Create a child of the current scope and make it current.
    ///
    /// Returns the previous scope, to hand back to [`Environment::leave`].
    pub fn push_scope(&mut self) -> ScopeId {
        self.enter(self.current)
    }

    /// Switch to a fresh child of `scope` (a closure's captured scope),
    /// returning the scope to restore with [`Environment::leave`].
    pub fn enter(&mut self, scope: ScopeId) -> ScopeId {
        let saved = self.current;
        self.frames.push(saved);
        self.current = self.alloc(scope);
        saved
    }

    /// Leave the current scope and make `saved` current again.
    pub fn leave(&mut self, saved: ScopeId) {
        let leaving = self.current;
        let restored = self.frames.pop();
        debug_assert_eq!(restored, Some(saved), "scopes left out of order");
        self.current = saved;
        if leaving == ScopeId::GLOBAL {
            return;
        }
        if self.scopes[leaving.index()].pinned {
            self.pending += 1;
            if self.pending >= self.next_collection {
                self.collect();
            }
        } else {
            self.release(leaving);
        }
    }

    /// Record that a closure holds the current scope.
    pub fn capture(&mut self) -> ScopeRef {
        let current = self.current;
        self.pin_chain(current);
        let slot = &mut self.scopes[current.index()];
        if let Some(anchor) = slot.anchor.as_ref().and_then(Weak::upgrade) {
            return ScopeRef(anchor);
        }
        let anchor = Arc::new(ScopeAnchor { id: current });
        slot.anchor = Some(Arc::downgrade(&anchor));
        ScopeRef(anchor)
    }

    /// Free every pinned scope no live value or active frame can reach.
    pub fn collect(&mut self) {
        let mut held_internally = vec![0usize; self.scopes.len()];
        for scope in self.scopes.iter().filter(|s| s.live) {
            for id in scope.captured_scopes() {
                held_internally[id.index()] += 1;
            }
        }

        let mut work: Vec<ScopeId> = Vec::with_capacity(self.frames.len() + 2);
        work.push(ScopeId::GLOBAL);
        work.push(self.current);
        work.extend_from_slice(&self.frames);
        for (index, scope) in self.scopes.iter().enumerate() {
            let holders = scope.anchor.as_ref().map_or(0, Weak::strong_count);
            if scope.live && holders > held_internally[index] {
                work.push(scope_id(index));
            }
        }

        let mut marked = vec![false; self.scopes.len()];
        while let Some(id) = work.pop() {
            if std::mem::replace(&mut marked[id.index()], true) {
                continue;
            }
            let scope = &self.scopes[id.index()];
            work.extend(scope.parent);
            work.extend(scope.captured_scopes());
        }

        let mut freed = 0usize;
        for index in 0..self.scopes.len() {
            if self.scopes[index].live && !marked[index] {
                self.release(scope_id(index));
                freed += 1;
            }
        }
        let pinned = self.scopes.iter().filter(|s| s.live && s.pinned).count();
        self.pending = 0;
        self.next_collection = pinned.max(MIN_COLLECTION_INTERVAL);
        tracing::trace!(freed, pinned, "scopes collected");
    }

    fn pin_chain(&mut self, id: ScopeId) {
        let mut scope = Some(id);
        while let Some(id) = scope {
            let slot = &mut self.scopes[id.index()];
            if slot.pinned {
                break;
            }
            slot.pinned = true;
            scope = slot.parent;
        }
    }

    fn alloc(&mut self, parent: ScopeId) -> ScopeId {
        let scope = Scope::with_parent(parent);
        if let Some(id) = self.free.pop() {
            self.scopes[id.index()] = scope;
            return id;
        }
        let id = scope_id(self.scopes.len());
        self.scopes.push(scope);
        id
    }

    fn release(&mut self, id: ScopeId) {
        self.scopes[id.index()] = Scope::default();
        self.free.push(id);
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "live scopes are bounded far below u32::MAX by call depth and memory"
)]
fn scope_id(index: usize) -> ScopeId {
    ScopeId(index as u32)
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
