//! Module for [`TileSheet`]s, i.e. textures sliced into a grid of equally sized cells.
use std::{collections::HashMap, sync::Arc};

use smallvec::SmallVec;

use crate::{
    assets::AssetRegistry,
    config::SheetDefinition,
    error::Result,
    region::{Drawable, Region},
    texture::Texture,
    units::{cell_length, cell_origin, from_index, grid_length},
};

/// Stack allocation size for the cell listings returned by [`TileSheet::cells`]
const SHEET_STACK_SIZE: usize = 64;

/// Every cell of a sheet, in index order.
pub type SheetCells<T> = SmallVec<[Region<T>; SHEET_STACK_SIZE]>;

/// A texture treated as a grid of fixed size cells, used by tilemaps and animations.
///
/// Cells are numbered row-major, left to right then top to bottom:
///
/// ```text
/// |---|---|---|---|
/// | 0 | 1 | 2 | 3 |
/// |---|---|---|---|
/// | 4 | 5 | 6 | 7 |
/// |---|---|---|---|
/// ```
///
/// Regions are computed on first use and cached for the lifetime of the sheet, since the same
/// tiles are typically looked up every frame. The texture is assumed never to change.
pub struct TileSheet<T> {
    texture: Arc<T>,
    cell_width: i32,
    cell_height: i32,
    cache: HashMap<i32, Region<T>>,
}

impl<T: Texture> TileSheet<T> {
    /// Slices `texture` into cells of `cell_width` by `cell_height` pixels.
    ///
    /// The cell size is not validated. A zero size, or one larger than the texture, gives a
    /// sheet with no cells. A negative size gives negative column and row counts, and regions
    /// with negative sizes.
    pub fn from_texture(texture: Arc<T>, cell_width: i32, cell_height: i32) -> Self {
        let sheet = Self {
            texture,
            cell_width,
            cell_height,
            cache: HashMap::new(),
        };
        let (columns, rows) = (sheet.columns(), sheet.rows());
        log::debug!(
            "sheet of {}x{} px cut into {}x{} px cells: {} columns, {} rows",
            sheet.texture.width(),
            sheet.texture.height(),
            cell_width,
            cell_height,
            columns,
            rows
        );
        if columns <= 0 || rows <= 0 {
            log::warn!(
                "degenerate sheet grid of {} columns and {} rows: {}x{} px cells on a {}x{} px texture",
                columns,
                rows,
                cell_width,
                cell_height,
                sheet.texture.width(),
                sheet.texture.height()
            );
        }
        sheet
    }

    /// Looks up the texture registered as `name` and slices it like [`TileSheet::from_texture`].
    ///
    /// Fails with [`crate::error::Error::ResourceNotFound`] if the registry has no such texture.
    pub fn from_resource_name<R>(
        registry: &R,
        name: &str,
        cell_width: i32,
        cell_height: i32,
    ) -> Result<Self>
    where
        R: AssetRegistry<Texture = T> + ?Sized,
    {
        let texture = registry.resolve(name)?;
        Ok(Self::from_texture(texture, cell_width, cell_height))
    }

    /// Builds the sheet described by `definition`, resolving its texture through `registry`.
    pub fn from_definition<R>(registry: &R, definition: &SheetDefinition) -> Result<Self>
    where
        R: AssetRegistry<Texture = T> + ?Sized,
    {
        Self::from_resource_name(
            registry,
            &definition.texture,
            definition.cell_width,
            definition.cell_height,
        )
    }

    /// The number of whole cells on the x-axis of the sheet.
    pub fn columns(&self) -> i32 {
        grid_length(self.texture.width(), self.cell_width)
    }

    /// The number of whole cells on the y-axis of the sheet.
    pub fn rows(&self) -> i32 {
        grid_length(self.texture.height(), self.cell_height)
    }

    /// The number of cells in the sheet, `columns() * rows()`.
    pub fn cell_count(&self) -> i32 {
        cell_length(self.columns(), self.rows())
    }

    /// Gets the region of the cell at `index`, computing and caching it on first access.
    ///
    /// The index is not checked against [`TileSheet::cell_count`]. Indices past the last cell
    /// continue the row-major pattern below the texture, and negative indices map to negative
    /// columns and rows, since division truncates toward zero.
    pub fn cell_at(&mut self, index: i32) -> Region<T> {
        let columns = self.columns();
        let Self {
            texture,
            cell_width,
            cell_height,
            cache,
        } = self;
        cache
            .entry(index)
            .or_insert_with(|| {
                let (column, row) = from_index(index, columns);
                let (x, y) = cell_origin(column, row, *cell_width, *cell_height);
                log::trace!("caching cell {index} at ({x}, {y})");
                Region::new(
                    Arc::clone(texture),
                    x,
                    y,
                    *cell_width as f32,
                    *cell_height as f32,
                )
            })
            .clone()
    }

    /// Gets every cell of the sheet in index order, filling the cache along the way.
    pub fn cells(&mut self) -> SheetCells<T> {
        (0..self.cell_count()).map(|i| self.cell_at(i)).collect()
    }

    /// Same as [`TileSheet::cell_at`], for callers that accept any [`Drawable`].
    pub fn drawable_at(&mut self, index: i32) -> Box<dyn Drawable>
    where
        T: 'static,
    {
        Box::new(self.cell_at(index))
    }

    /// Same as [`TileSheet::cells`], for callers that accept any [`Drawable`].
    pub fn drawables(&mut self) -> Vec<Box<dyn Drawable>>
    where
        T: 'static,
    {
        (0..self.cell_count()).map(|i| self.drawable_at(i)).collect()
    }
}

impl<T> TileSheet<T> {
    /// The texture this sheet is cut from.
    pub fn texture(&self) -> &Arc<T> {
        &self.texture
    }

    /// Width of a cell, in pixels.
    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    /// Height of a cell, in pixels.
    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    /// Gets the cached region at `index`, without computing it if it is missing.
    pub fn cached(&self, index: i32) -> Option<&Region<T>> {
        self.cache.get(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assets::Assets, error::Error};

    struct Blank {
        width: f32,
        height: f32,
    }

    impl Texture for Blank {
        fn width(&self) -> f32 {
            self.width
        }
        fn height(&self) -> f32 {
            self.height
        }
    }

    fn sheet(width: f32, height: f32, cell_width: i32, cell_height: i32) -> TileSheet<Blank> {
        TileSheet::from_texture(Arc::new(Blank { width, height }), cell_width, cell_height)
    }

    #[test]
    fn small_sheet() {
        let mut sheet = sheet(64.0, 32.0, 16, 16);
        assert_eq!(sheet.columns(), 4);
        assert_eq!(sheet.rows(), 2);
        assert_eq!(sheet.cell_count(), 8);

        let cell = sheet.cell_at(5);
        assert_eq!(cell.origin(), (16.0, 16.0));
        assert_eq!(cell.size(), (16.0, 16.0));
    }

    #[test]
    fn last_cell() {
        let mut sheet = sheet(100.0, 50.0, 10, 10);
        assert_eq!(sheet.columns(), 10);
        assert_eq!(sheet.rows(), 5);
        assert_eq!(sheet.cell_count(), 50);

        let cell = sheet.cell_at(49);
        assert_eq!(cell.origin(), (90.0, 40.0));
        assert_eq!(cell.size(), (10.0, 10.0));
    }

    #[test]
    fn row_major_layout() {
        let mut sheet = sheet(48.0, 40.0, 16, 8);
        let columns = sheet.columns();
        for i in 0..sheet.cell_count() {
            let cell = sheet.cell_at(i);
            let expected = (((i % columns) * 16) as f32, ((i / columns) * 8) as f32);
            assert_eq!(cell.origin(), expected, "cell {i}");
            assert_eq!(cell.size(), (16.0, 8.0), "cell {i}");
        }
    }

    #[test]
    fn partial_cells_are_dropped() {
        let sheet = sheet(70.0, 31.0, 16, 16);
        assert_eq!(sheet.columns(), 4);
        assert_eq!(sheet.rows(), 1);
        assert_eq!(sheet.cell_count(), 4);
    }

    #[test]
    fn lookups_are_cached() {
        let mut sheet = sheet(64.0, 32.0, 16, 16);
        assert!(sheet.cached(3).is_none());
        let first = sheet.cell_at(3);
        assert_eq!(sheet.cached(3), Some(&first));
        let second = sheet.cell_at(3);
        assert_eq!(first, second);
        assert!(sheet.cached(2).is_none());
    }

    #[test]
    fn cells_fill_cache_in_order() {
        let mut sheet = sheet(64.0, 32.0, 16, 16);
        let cells = sheet.cells();
        assert_eq!(cells.len() as i32, sheet.columns() * sheet.rows());
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(sheet.cached(i as i32), Some(cell));
        }
        assert_eq!(cells[7].origin(), (48.0, 16.0));
    }

    #[test]
    fn out_of_range_indices() {
        let mut sheet = sheet(64.0, 32.0, 16, 16);
        assert_eq!(sheet.cell_at(8).origin(), (0.0, 32.0));
        assert_eq!(sheet.cell_at(-1).origin(), (-16.0, 0.0));
        assert_eq!(sheet.cell_at(-5).origin(), (-16.0, -16.0));
    }

    #[test]
    fn degenerate_cell_size() {
        let mut sheet = sheet(64.0, 32.0, 0, 16);
        assert_eq!(sheet.columns(), 0);
        assert_eq!(sheet.cell_count(), 0);
        assert!(sheet.cells().is_empty());
        let cell = sheet.cell_at(3);
        assert_eq!(cell.origin(), (0.0, 0.0));
        assert_eq!(cell.size(), (0.0, 16.0));
    }

    #[test]
    fn negative_cell_size() {
        let mut sheet = sheet(64.0, 32.0, -16, -16);
        assert_eq!(sheet.columns(), -4);
        assert_eq!(sheet.rows(), -2);
        assert_eq!(sheet.cell_count(), 8);

        let cell = sheet.cell_at(5);
        assert_eq!(cell.origin(), (-16.0, 16.0));
        assert_eq!(cell.size(), (-16.0, -16.0));
        assert_eq!(sheet.cells().len(), 8);
    }

    #[test]
    fn drawables_match_cells() {
        let mut sheet = sheet(64.0, 32.0, 16, 16);
        for i in -2..10 {
            let cell = sheet.cell_at(i);
            let drawable = sheet.drawable_at(i);
            assert_eq!(drawable.width(), cell.width());
            assert_eq!(drawable.height(), cell.height());
            assert_eq!(drawable.tex_coords(), cell.tex_coords());
        }
        let drawables = sheet.drawables();
        assert_eq!(drawables.len(), 8);
        assert_eq!(drawables[5].tex_coords(), sheet.cell_at(5).tex_coords());
    }

    #[test]
    fn cells_share_texture() {
        let mut sheet = sheet(64.0, 32.0, 16, 16);
        let cell = sheet.cell_at(0);
        assert!(Arc::ptr_eq(cell.texture(), sheet.texture()));
    }

    #[test]
    fn by_name() {
        let mut assets = Assets::new();
        assets.insert(
            "tiles",
            Blank {
                width: 64.0,
                height: 32.0,
            },
        );
        let mut sheet = TileSheet::from_resource_name(&assets, "tiles", 16, 16).unwrap();
        assert_eq!(sheet.cell_count(), 8);
        assert_eq!(sheet.cell_at(5).origin(), (16.0, 16.0));
        assert!(Arc::ptr_eq(sheet.texture(), assets.get("tiles").unwrap()));
    }

    #[test]
    fn unknown_name() {
        let assets = Assets::<Blank>::new();
        match TileSheet::from_resource_name(&assets, "missing", 16, 16) {
            Err(Error::ResourceNotFound(name)) => assert_eq!(name, "missing"),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("sheet created from an unregistered texture"),
        }
    }

    #[test]
    fn from_definition() {
        let mut assets = Assets::new();
        assets.insert(
            "dungeon",
            Blank {
                width: 100.0,
                height: 50.0,
            },
        );
        let definition =
            SheetDefinition::from_ron("(texture: \"dungeon\", cell_width: 10, cell_height: 10)")
                .unwrap();
        let sheet = TileSheet::from_definition(&assets, &definition).unwrap();
        assert_eq!(sheet.cell_width(), 10);
        assert_eq!(sheet.cell_height(), 10);
        assert_eq!(sheet.cell_count(), 50);
    }
}
