use tracing::debug;

use stagger_types::FieldKindId;

use crate::descriptor::PositionDescriptor;
use crate::error::RegistryError;

/// 位置テーブル記述の集合。
///
/// [`Registry::collect`] はリンクされた全クレートが `inventory::submit!` した記述を集める。
/// 登録順はそのまま保持し、[`Registry::sorted`] で `(cell, kind, dim)` 順に並べ替えて取り出せる。
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: Vec<&'static PositionDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 提出済みの全記述から構築する。
    pub fn collect() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(inventory::iter::<PositionDescriptor>)?;
        Ok(registry)
    }

    /// 記述群をまとめて追加する。
    ///
    /// 既存の記述または同じ組の中で `(cell, kind, dim)` が重複するか、
    /// 形状の検証に失敗した場合はエラーを返し、レジストリは変更しない。
    pub fn register<I>(&mut self, descriptors: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = &'static PositionDescriptor>,
    {
        let mut batch: Vec<&'static PositionDescriptor> = Vec::new();
        for d in descriptors {
            let duplicate = self
                .entries
                .iter()
                .chain(batch.iter())
                .any(|e| e.matches(d.cell, d.kind, d.dim));
            if duplicate {
                return Err(RegistryError::Duplicate {
                    cell: d.cell,
                    kind: d.kind,
                    dim: d.dim,
                });
            }
            d.validate()?;
            batch.push(d);
        }

        debug!(
            added = batch.len(),
            total = self.entries.len() + batch.len(),
            "registered field positions"
        );
        self.entries.extend(batch);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PositionDescriptor> + '_ {
        self.entries.iter().copied()
    }

    pub fn sorted(&self) -> Vec<&'static PositionDescriptor> {
        let mut out = self.entries.clone();
        out.sort_by(|a, b| (a.cell, a.kind, a.dim).cmp(&(b.cell, b.kind, b.dim)));
        out
    }

    pub fn lookup(
        &self,
        cell: &str,
        kind: FieldKindId,
        dim: usize,
    ) -> Result<&'static PositionDescriptor, RegistryError> {
        let found = self.iter().find(|d| d.matches(cell, kind, dim));
        debug!(cell, %kind, dim, found = found.is_some(), "field position lookup");
        found.ok_or_else(|| RegistryError::NotRegistered {
            cell: cell.to_string(),
            kind,
            dim,
        })
    }
}
