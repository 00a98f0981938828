//! Write geometries to TWKB records.

use std::io::Write;

use crate::error::{WkbError, WkbResult};
use crate::geo_traits::{
    CoordTrait, Dimension, GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait,
};
use crate::geometry::{
    line_string_from_line, polygon_from_rect, polygon_from_triangle, GeometryKind,
};
use crate::twkb::header::TwkbHeader;
use crate::twkb::varint::{write_varint, zigzag};
use crate::twkb::{scale_checked, DeltaState};

/// Options for writing TWKB records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwkbWriteOptions {
    xy_precision: i8,
    z_precision: u8,
    m_precision: u8,
    include_bbox: bool,
    include_size: bool,
    ids: Option<Vec<i64>>,
}

impl TwkbWriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decimal digits kept on X and Y. Negative precisions round to tens,
    /// hundreds and so on. Clamped to [-7, 7].
    pub fn with_xy_precision(mut self, precision: i8) -> Self {
        self.xy_precision = precision.clamp(-7, 7);
        self
    }

    /// Decimal digits kept on Z, clamped to [0, 7].
    pub fn with_z_precision(mut self, precision: u8) -> Self {
        self.z_precision = precision.min(7);
        self
    }

    /// Decimal digits kept on M, clamped to [0, 7].
    pub fn with_m_precision(mut self, precision: u8) -> Self {
        self.m_precision = precision.min(7);
        self
    }

    /// Emit a bounding box between the header and the body.
    pub fn with_bbox(mut self, include: bool) -> Self {
        self.include_bbox = include;
        self
    }

    /// Emit the byte length of everything following it, so records can be
    /// skipped without decoding.
    pub fn with_size(mut self, include: bool) -> Self {
        self.include_size = include;
        self
    }

    /// Attach one id per member of a multi geometry or collection.
    pub fn with_ids(mut self, ids: Vec<i64>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn xy_precision(&self) -> i8 {
        self.xy_precision
    }

    pub fn z_precision(&self) -> u8 {
        self.z_precision
    }

    pub fn m_precision(&self) -> u8 {
        self.m_precision
    }

    /// Options for records nested inside a collection: same precisions,
    /// nothing else carries over.
    fn child(&self) -> Self {
        Self {
            xy_precision: self.xy_precision,
            z_precision: self.z_precision,
            m_precision: self.m_precision,
            include_bbox: false,
            include_size: false,
            ids: None,
        }
    }
}

/// Running min/max per axis over the scaled integers of a record.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min: [i64; 4],
    max: [i64; 4],
}

impl Default for Extent {
    fn default() -> Self {
        Self {
            min: [i64::MAX; 4],
            max: [i64::MIN; 4],
        }
    }
}

impl Extent {
    fn observe(&mut self, n: usize, scaled: i64) {
        self.min[n] = self.min[n].min(scaled);
        self.max[n] = self.max[n].max(scaled);
    }

    fn merge(&mut self, other: &Extent) {
        for n in 0..4 {
            self.min[n] = self.min[n].min(other.min[n]);
            self.max[n] = self.max[n].max(other.max[n]);
        }
    }
}

fn make_header(
    kind: GeometryKind,
    dim: Dimension,
    options: &TwkbWriteOptions,
    is_empty: bool,
    has_ids: bool,
) -> TwkbHeader {
    TwkbHeader {
        kind,
        dim,
        xy_precision: options.xy_precision,
        z_precision: if dim.has_z() { options.z_precision } else { 0 },
        m_precision: if dim.has_m() { options.m_precision } else { 0 },
        has_bbox: options.include_bbox && !is_empty,
        has_size: options.include_size,
        has_ids,
        is_empty,
    }
}

fn checked_ids<'a>(options: &'a TwkbWriteOptions, count: usize) -> WkbResult<Option<&'a [i64]>> {
    match &options.ids {
        None => Ok(None),
        Some(ids) if ids.len() == count => Ok(Some(ids)),
        Some(ids) => Err(WkbError::General(format!(
            "id list length {} does not match member count {}",
            ids.len(),
            count
        ))),
    }
}

fn reject_ids(options: &TwkbWriteOptions) -> WkbResult<()> {
    if options.ids.is_some() {
        return Err(WkbError::General(
            "id lists apply to multi geometries and collections".to_string(),
        ));
    }
    Ok(())
}

fn encode_coord(
    body: &mut Vec<u8>,
    coord: &impl CoordTrait<T = f64>,
    dim: Dimension,
    precisions: &[i8; 4],
    state: &mut DeltaState,
    extent: &mut Extent,
) -> WkbResult<()> {
    for n in 0..dim.size() {
        let value = coord.nth(n).ok_or_else(|| {
            WkbError::UnsupportedDimensionality(format!(
                "coordinate lacks ordinate {n} required by {dim}"
            ))
        })?;
        let scaled = scale_checked(value, precisions[n])?;
        extent.observe(n, scaled);
        write_varint(body, zigzag(state.advance(n, scaled)))?;
    }
    Ok(())
}

/// A coordinate run: count varint plus delta-encoded coordinates. Used for
/// line string bodies and polygon rings alike.
fn encode_coord_seq(
    body: &mut Vec<u8>,
    seq: &impl LineStringTrait<T = f64>,
    precisions: &[i8; 4],
    state: &mut DeltaState,
    extent: &mut Extent,
) -> WkbResult<()> {
    write_varint(body, seq.num_coords() as u64)?;
    for coord in seq.coords() {
        encode_coord(body, &coord, seq.dim(), precisions, state, extent)?;
    }
    Ok(())
}

fn encode_id_list(body: &mut Vec<u8>, ids: &[i64]) -> WkbResult<()> {
    let mut prev = 0i64;
    for &id in ids {
        write_varint(body, zigzag(id.wrapping_sub(prev)))?;
        prev = id;
    }
    Ok(())
}

/// Append the per-axis (min, range) pairs of the record's scaled extent.
fn encode_bbox(out: &mut Vec<u8>, header: &TwkbHeader, extent: &Extent) -> WkbResult<()> {
    for n in 0..header.dim.size() {
        // a non-empty container of empty members spans nothing
        let (min, max) = if extent.min[n] > extent.max[n] {
            (0, 0)
        } else {
            (extent.min[n], extent.max[n])
        };
        write_varint(out, zigzag(min))?;
        write_varint(out, zigzag(max.wrapping_sub(min)))?;
    }
    Ok(())
}

fn finish_record<W: Write>(
    mut writer: W,
    header: &TwkbHeader,
    extent: &Extent,
    body: &[u8],
) -> WkbResult<()> {
    header.write(&mut writer)?;
    let mut bbox = Vec::new();
    if header.has_bbox {
        encode_bbox(&mut bbox, header, extent)?;
    }
    if header.has_size {
        write_varint(&mut writer, (bbox.len() + body.len()) as u64)?;
    }
    writer.write_all(&bbox)?;
    writer.write_all(body)?;
    Ok(())
}

type RecordParts = (TwkbHeader, Extent, Vec<u8>);

fn point_parts(geom: &impl PointTrait<T = f64>, options: &TwkbWriteOptions) -> WkbResult<RecordParts> {
    reject_ids(options)?;
    let dim = geom.dim();
    let header = make_header(GeometryKind::Point, dim, options, geom.coord().is_none(), false);
    let mut state = DeltaState::default();
    let mut extent = Extent::default();
    let mut body = Vec::new();
    if let Some(coord) = geom.coord() {
        encode_coord(
            &mut body,
            &coord,
            dim,
            &header.precisions(),
            &mut state,
            &mut extent,
        )?;
    }
    Ok((header, extent, body))
}

fn line_string_parts(
    geom: &impl LineStringTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<RecordParts> {
    reject_ids(options)?;
    let header = make_header(
        GeometryKind::LineString,
        geom.dim(),
        options,
        geom.num_coords() == 0,
        false,
    );
    let mut state = DeltaState::default();
    let mut extent = Extent::default();
    let mut body = Vec::new();
    if geom.num_coords() > 0 {
        encode_coord_seq(&mut body, geom, &header.precisions(), &mut state, &mut extent)?;
    }
    Ok((header, extent, body))
}

fn polygon_parts(
    geom: &impl PolygonTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<RecordParts> {
    reject_ids(options)?;
    let header = make_header(
        GeometryKind::Polygon,
        geom.dim(),
        options,
        geom.exterior().is_none(),
        false,
    );
    let precisions = header.precisions();
    let mut state = DeltaState::default();
    let mut extent = Extent::default();
    let mut body = Vec::new();
    if let Some(ext) = geom.exterior() {
        write_varint(&mut body, 1 + geom.num_interiors() as u64)?;
        encode_coord_seq(&mut body, &ext, &precisions, &mut state, &mut extent)?;
        for ring in geom.interiors() {
            encode_coord_seq(&mut body, &ring, &precisions, &mut state, &mut extent)?;
        }
    }
    Ok((header, extent, body))
}

fn multi_point_parts(
    geom: &impl MultiPointTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<RecordParts> {
    let dim = geom.dim();
    let num = geom.num_points();
    let ids = checked_ids(options, num)?;
    let header = make_header(
        GeometryKind::MultiPoint,
        dim,
        options,
        num == 0,
        ids.is_some() && num > 0,
    );
    let precisions = header.precisions();
    let mut state = DeltaState::default();
    let mut extent = Extent::default();
    let mut body = Vec::new();
    if num > 0 {
        write_varint(&mut body, num as u64)?;
        if let Some(ids) = ids {
            encode_id_list(&mut body, ids)?;
        }
        for point in geom.points() {
            let coord = point.coord().ok_or_else(|| {
                WkbError::General(
                    "an empty point cannot be a multi point member in TWKB".to_string(),
                )
            })?;
            encode_coord(&mut body, &coord, dim, &precisions, &mut state, &mut extent)?;
        }
    }
    Ok((header, extent, body))
}

fn multi_line_string_parts(
    geom: &impl MultiLineStringTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<RecordParts> {
    let num = geom.num_lines();
    let ids = checked_ids(options, num)?;
    let header = make_header(
        GeometryKind::MultiLineString,
        geom.dim(),
        options,
        num == 0,
        ids.is_some() && num > 0,
    );
    let precisions = header.precisions();
    let mut state = DeltaState::default();
    let mut extent = Extent::default();
    let mut body = Vec::new();
    if num > 0 {
        write_varint(&mut body, num as u64)?;
        if let Some(ids) = ids {
            encode_id_list(&mut body, ids)?;
        }
        for line in geom.lines() {
            encode_coord_seq(&mut body, &line, &precisions, &mut state, &mut extent)?;
        }
    }
    Ok((header, extent, body))
}

fn multi_polygon_parts(
    geom: &impl MultiPolygonTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<RecordParts> {
    let num = geom.num_polygons();
    let ids = checked_ids(options, num)?;
    let header = make_header(
        GeometryKind::MultiPolygon,
        geom.dim(),
        options,
        num == 0,
        ids.is_some() && num > 0,
    );
    let precisions = header.precisions();
    let mut state = DeltaState::default();
    let mut extent = Extent::default();
    let mut body = Vec::new();
    if num > 0 {
        write_varint(&mut body, num as u64)?;
        if let Some(ids) = ids {
            encode_id_list(&mut body, ids)?;
        }
        for polygon in geom.polygons() {
            let num_rings = match polygon.exterior() {
                Some(_) => 1 + polygon.num_interiors(),
                None => 0,
            };
            write_varint(&mut body, num_rings as u64)?;
            if let Some(ext) = polygon.exterior() {
                encode_coord_seq(&mut body, &ext, &precisions, &mut state, &mut extent)?;
            }
            for ring in polygon.interiors() {
                encode_coord_seq(&mut body, &ring, &precisions, &mut state, &mut extent)?;
            }
        }
    }
    Ok((header, extent, body))
}

fn geometry_collection_parts(
    geom: &impl GeometryCollectionTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<RecordParts> {
    let num = geom.num_geometries();
    let ids = checked_ids(options, num)?;
    let header = make_header(
        GeometryKind::GeometryCollection,
        geom.dim(),
        options,
        num == 0,
        ids.is_some() && num > 0,
    );
    let mut extent = Extent::default();
    let mut body = Vec::new();
    if num > 0 {
        write_varint(&mut body, num as u64)?;
        if let Some(ids) = ids {
            encode_id_list(&mut body, ids)?;
        }
        let child = options.child();
        // members are complete records: own header, fresh accumulator
        for item in geom.geometries() {
            let (item_header, item_extent, item_body) = geometry_parts(&item, &child)?;
            extent.merge(&item_extent);
            finish_record(&mut body, &item_header, &item_extent, &item_body)?;
        }
    }
    Ok((header, extent, body))
}

fn geometry_parts(
    geom: &impl GeometryTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<RecordParts> {
    use GeometryType::*;
    match geom.as_type() {
        Point(g) => point_parts(g, options),
        LineString(g) => line_string_parts(g, options),
        Polygon(g) => polygon_parts(g, options),
        MultiPoint(g) => multi_point_parts(g, options),
        MultiLineString(g) => multi_line_string_parts(g, options),
        MultiPolygon(g) => multi_polygon_parts(g, options),
        GeometryCollection(g) => geometry_collection_parts(g, options),
        Line(g) => line_string_parts(&line_string_from_line(g), options),
        Rect(g) => polygon_parts(&polygon_from_rect(g), options),
        Triangle(g) => polygon_parts(&polygon_from_triangle(g), options),
    }
}

/// Write a Point geometry to a Writer as TWKB.
pub fn write_point_as_twkb<W: Write>(
    writer: W,
    geom: &impl PointTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<()> {
    let (header, extent, body) = point_parts(geom, options)?;
    finish_record(writer, &header, &extent, &body)
}

/// Write a LineString geometry to a Writer as TWKB.
pub fn write_line_string_as_twkb<W: Write>(
    writer: W,
    geom: &impl LineStringTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<()> {
    let (header, extent, body) = line_string_parts(geom, options)?;
    finish_record(writer, &header, &extent, &body)
}

/// Write a Polygon geometry to a Writer as TWKB.
pub fn write_polygon_as_twkb<W: Write>(
    writer: W,
    geom: &impl PolygonTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<()> {
    let (header, extent, body) = polygon_parts(geom, options)?;
    finish_record(writer, &header, &extent, &body)
}

/// Write a MultiPoint geometry to a Writer as TWKB.
pub fn write_multi_point_as_twkb<W: Write>(
    writer: W,
    geom: &impl MultiPointTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<()> {
    let (header, extent, body) = multi_point_parts(geom, options)?;
    finish_record(writer, &header, &extent, &body)
}

/// Write a MultiLineString geometry to a Writer as TWKB.
pub fn write_multi_line_string_as_twkb<W: Write>(
    writer: W,
    geom: &impl MultiLineStringTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<()> {
    let (header, extent, body) = multi_line_string_parts(geom, options)?;
    finish_record(writer, &header, &extent, &body)
}

/// Write a MultiPolygon geometry to a Writer as TWKB.
pub fn write_multi_polygon_as_twkb<W: Write>(
    writer: W,
    geom: &impl MultiPolygonTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<()> {
    let (header, extent, body) = multi_polygon_parts(geom, options)?;
    finish_record(writer, &header, &extent, &body)
}

/// Write a GeometryCollection to a Writer as TWKB. Members are complete
/// records with their own headers and fresh delta accumulators.
pub fn write_geometry_collection_as_twkb<W: Write>(
    writer: W,
    geom: &impl GeometryCollectionTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<()> {
    let (header, extent, body) = geometry_collection_parts(geom, options)?;
    finish_record(writer, &header, &extent, &body)
}

/// Write a geometry of any kind to a Writer as TWKB.
pub fn write_geometry_as_twkb<W: Write>(
    writer: W,
    geom: &impl GeometryTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<()> {
    let (header, extent, body) = geometry_parts(geom, options)?;
    finish_record(writer, &header, &extent, &body)
}

/// Encode a geometry into a freshly allocated buffer.
pub fn to_twkb(
    geom: &impl GeometryTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_geometry_as_twkb(&mut buf, geom, options)?;
    Ok(buf)
}

/// Encode a geometry into a caller-provided slice, returning the number of
/// bytes written. A short destination is reported as
/// [`WkbError::BufferTooSmall`]; the record length is not knowable up front
/// for variable-width encodings, so the record is staged internally and the
/// destination is never partially written.
pub fn write_geometry_to_slice(
    out: &mut [u8],
    geom: &impl GeometryTrait<T = f64>,
    options: &TwkbWriteOptions,
) -> WkbResult<usize> {
    let buf = to_twkb(geom, options)?;
    if out.len() < buf.len() {
        return Err(WkbError::BufferTooSmall {
            needed: buf.len(),
            available: out.len(),
        });
    }
    out[..buf.len()].copy_from_slice(&buf);
    Ok(buf.len())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::p0;

    #[test]
    fn precision_seven_point_vector() {
        let options = TwkbWriteOptions::new().with_xy_precision(7);
        let mut buf = Vec::new();
        write_point_as_twkb(&mut buf, &p0(), &options).unwrap();
        assert_eq!(buf, hex::decode("e10080dac40980b48913").unwrap());
    }

    #[test]
    fn geo_geometries_encode_directly() {
        let options = TwkbWriteOptions::new().with_xy_precision(7);

        let geom = geo::Geometry::Point(geo::Point::new(1.0, 2.0));
        assert_eq!(
            to_twkb(&geom, &options).unwrap(),
            hex::decode("e10080dac40980b48913").unwrap()
        );

        let mut typed = Vec::new();
        write_point_as_twkb(&mut typed, &geo::Point::new(1.0, 2.0), &options).unwrap();
        assert_eq!(typed, to_twkb(&geom, &options).unwrap());
    }

    #[test]
    fn precisions_are_clamped() {
        let options = TwkbWriteOptions::new()
            .with_xy_precision(12)
            .with_z_precision(9)
            .with_m_precision(200);
        assert_eq!(options.xy_precision(), 7);
        assert_eq!(options.z_precision(), 7);
        assert_eq!(options.m_precision(), 7);
        let options = TwkbWriteOptions::new().with_xy_precision(-12);
        assert_eq!(options.xy_precision(), -7);
    }

    #[test]
    fn consecutive_encodes_are_independent() {
        use crate::geometry::{Coord, Point};

        let options = TwkbWriteOptions::new();
        let mut alone = Vec::new();
        write_point_as_twkb(&mut alone, &p0(), &options).unwrap();

        let mut after_other = Vec::new();
        write_point_as_twkb(
            &mut Vec::new(),
            &Point::new(Coord::xy(500.0, -500.0)),
            &options,
        )
        .unwrap();
        write_point_as_twkb(&mut after_other, &p0(), &options).unwrap();
        assert_eq!(alone, after_other);
    }

    #[test]
    fn out_of_range_ordinates_are_rejected() {
        use crate::geometry::{Coord, Point};

        let options = TwkbWriteOptions::new();
        let err = write_point_as_twkb(
            &mut Vec::new(),
            &Point::new(Coord::xy(1e30, 0.0)),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, WkbError::General(_)));

        // non-finite ordinates have no grid cell
        assert!(write_point_as_twkb(
            &mut Vec::new(),
            &Point::new(Coord::xy(f64::NAN, 0.0)),
            &options,
        )
        .is_err());
    }

    #[test]
    fn extreme_in_range_ordinates_round_trip() {
        use crate::geometry::{Coord, Geometry, Point};
        use crate::twkb::read_geometry;

        let geom: Geometry = Point::new(Coord::xy(1e18, -1e18)).into();
        let buf = to_twkb(&geom, &TwkbWriteOptions::new()).unwrap();
        let (back, read) = read_geometry(&buf).unwrap();
        assert_eq!(read, buf.len());
        assert_eq!(back, geom);
    }

    #[test]
    fn id_list_on_simple_geometry_is_rejected() {
        let options = TwkbWriteOptions::new().with_ids(vec![1]);
        let mut buf = Vec::new();
        assert!(write_point_as_twkb(&mut buf, &p0(), &options).is_err());
    }
}
