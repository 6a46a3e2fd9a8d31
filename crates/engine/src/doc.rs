use crate::comment::comment_for;
use crate::error::{QueryError, Result};
use crate::example::{examples_for, ExampleDoc};
use crate::index::DocEngine;
use godoc_loader::{is_exported, Package, Symbol};

/// Identity and comment of one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub import_path: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructSummary {
    pub name: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncSummary {
    pub name: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSummary {
    /// Receiver type for display, pointer indicator stripped
    pub receiver_type: String,
    pub name: String,
    pub comment: String,
}

/// The exported surface of one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInspection {
    pub package: PackageInfo,
    pub structs: Vec<StructSummary>,
    pub funcs: Vec<FuncSummary>,
    pub methods: Vec<MethodSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDoc {
    pub name: String,
    pub type_text: String,
    pub comment: String,
    pub is_exported: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDoc {
    pub name: String,
    pub signature: String,
    pub comment: String,
}

/// Full documentation for a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDoc {
    pub name: String,
    pub comment: String,
    pub fields: Vec<FieldDoc>,
    pub methods: Vec<MethodDoc>,
}

/// Full documentation for a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDoc {
    pub name: String,
    pub signature: String,
    pub comment: String,
    pub examples: Vec<ExampleDoc>,
}

/// Full documentation for a method on a named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDocDetail {
    /// Receiver type for display, pointer indicator stripped
    pub receiver_type: String,
    pub name: String,
    pub signature: String,
    pub comment: String,
    pub examples: Vec<ExampleDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDoc {
    pub name: String,
    pub type_text: String,
    pub value_text: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDoc {
    pub name: String,
    pub type_text: String,
    pub comment: String,
}

/// Strip exactly one leading pointer indicator for display; value
/// receivers pass through unchanged.
fn display_receiver(receiver: &str) -> String {
    receiver.strip_prefix('*').unwrap_or(receiver).to_string()
}

impl DocEngine {
    /// List every loaded package with its package comment.
    ///
    /// An empty engine yields an empty list, not an error.
    pub fn list_packages(&self) -> Vec<PackageInfo> {
        self.all_packages().map(package_info).collect()
    }

    /// Enumerate a package's exported structs, functions, and methods.
    pub fn inspect_package(&self, import_path: &str) -> Result<PackageInspection> {
        let pkg = self.package(import_path)?;

        let mut structs = Vec::new();
        let mut funcs = Vec::new();
        for (name, symbol) in &pkg.scope.symbols {
            if !is_exported(name) {
                continue;
            }
            match symbol {
                Symbol::Type(t) if t.is_struct => structs.push(StructSummary {
                    name: name.clone(),
                    comment: comment_for(pkg, name),
                }),
                Symbol::Func(_) => funcs.push(FuncSummary {
                    name: name.clone(),
                    comment: comment_for(pkg, name),
                }),
                _ => {}
            }
        }

        let mut methods = Vec::new();
        for table in pkg.scope.methods.values() {
            for method in table {
                if !is_exported(&method.name) {
                    continue;
                }
                methods.push(MethodSummary {
                    receiver_type: display_receiver(&method.receiver_text),
                    name: method.name.clone(),
                    comment: comment_for(pkg, &method.name),
                });
            }
        }

        Ok(PackageInspection {
            package: package_info(pkg),
            structs,
            funcs,
            methods,
        })
    }

    /// Full documentation for a struct: comment, fields, methods.
    pub fn struct_doc(&self, import_path: &str, struct_name: &str) -> Result<StructDoc> {
        let pkg = self.package(import_path)?;
        let symbol = pkg.scope.symbols.get(struct_name).ok_or_else(|| {
            QueryError::StructNotFound {
                path: import_path.to_string(),
                name: struct_name.to_string(),
            }
        })?;
        let Symbol::Type(t) = symbol else {
            return Err(QueryError::NotAStruct {
                path: import_path.to_string(),
                name: struct_name.to_string(),
            });
        };
        if !t.is_struct {
            return Err(QueryError::NotAStruct {
                path: import_path.to_string(),
                name: struct_name.to_string(),
            });
        }

        let fields = t
            .fields
            .iter()
            .map(|f| FieldDoc {
                name: f.name.clone(),
                type_text: f.type_text.clone(),
                comment: comment_for(pkg, &f.name),
                is_exported: f.is_exported,
            })
            .collect();

        let methods = pkg
            .scope
            .methods
            .get(struct_name)
            .map(|table| {
                table
                    .iter()
                    .map(|m| MethodDoc {
                        name: m.name.clone(),
                        signature: m.signature.clone(),
                        comment: comment_for(pkg, &m.name),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(StructDoc {
            name: struct_name.to_string(),
            comment: comment_for(pkg, struct_name),
            fields,
            methods,
        })
    }

    /// Full documentation for a receiver-less function, examples included.
    ///
    /// A name that resolves to a method, type, constant, or variable is a
    /// kind error, distinct from absence.
    pub fn func_doc(&self, import_path: &str, func_name: &str) -> Result<FuncDoc> {
        let pkg = self.package(import_path)?;
        match pkg.scope.symbols.get(func_name) {
            Some(Symbol::Func(f)) => Ok(FuncDoc {
                name: func_name.to_string(),
                signature: f.signature.clone(),
                comment: comment_for(pkg, func_name),
                examples: examples_for(pkg, func_name),
            }),
            Some(_) => Err(QueryError::NotAFunction {
                path: import_path.to_string(),
                name: func_name.to_string(),
            }),
            None if pkg.scope.has_method_named(func_name) => Err(QueryError::NotAFunction {
                path: import_path.to_string(),
                name: func_name.to_string(),
            }),
            None => Err(QueryError::FuncNotFound {
                path: import_path.to_string(),
                name: func_name.to_string(),
            }),
        }
    }

    /// Full documentation for a method, looked up receiver-first.
    pub fn method_doc(
        &self,
        import_path: &str,
        struct_name: &str,
        method_name: &str,
    ) -> Result<MethodDocDetail> {
        let pkg = self.package(import_path)?;
        let symbol = pkg.scope.symbols.get(struct_name).ok_or_else(|| {
            QueryError::StructNotFound {
                path: import_path.to_string(),
                name: struct_name.to_string(),
            }
        })?;
        if !matches!(symbol, Symbol::Type(_)) {
            return Err(QueryError::NotAStruct {
                path: import_path.to_string(),
                name: struct_name.to_string(),
            });
        }

        let method = pkg
            .scope
            .methods
            .get(struct_name)
            .and_then(|table| table.iter().find(|m| m.name == method_name))
            .ok_or_else(|| QueryError::MethodNotFound {
                path: import_path.to_string(),
                receiver: struct_name.to_string(),
                name: method_name.to_string(),
            })?;

        Ok(MethodDocDetail {
            receiver_type: display_receiver(&method.receiver_text),
            name: method_name.to_string(),
            signature: method.signature.clone(),
            comment: comment_for(pkg, method_name),
            examples: examples_for(pkg, method_name),
        })
    }

    /// Every package-level constant and variable, documented.
    ///
    /// No exported-only filter here; unexported values are part of the
    /// package's documented internals.
    pub fn const_and_var_doc(&self, import_path: &str) -> Result<(Vec<ConstDoc>, Vec<VarDoc>)> {
        let pkg = self.package(import_path)?;

        let mut constants = Vec::new();
        let mut variables = Vec::new();
        for (name, symbol) in &pkg.scope.symbols {
            match symbol {
                Symbol::Const(c) => constants.push(ConstDoc {
                    name: name.clone(),
                    type_text: c.type_text.clone(),
                    value_text: c.value_text.clone(),
                    comment: comment_for(pkg, name),
                }),
                Symbol::Var(v) => variables.push(VarDoc {
                    name: name.clone(),
                    type_text: v.type_text.clone(),
                    comment: comment_for(pkg, name),
                }),
                _ => {}
            }
        }

        Ok((constants, variables))
    }
}

fn package_info(pkg: &Package) -> PackageInfo {
    PackageInfo {
        name: pkg.name.clone(),
        import_path: pkg.import_path.clone(),
        comment: pkg.package_comment().to_string(),
    }
}
