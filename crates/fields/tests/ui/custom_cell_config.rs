use stagger_fields::{
    CellFieldPosition, CellScheme, ConfigOverrides, FieldE, FieldPosition, FieldTmp,
    NumericalCellType, Position, SimulationConfig, YeeConfig, config_field_position,
    field_position,
};
use stagger_meta::{Alias, PairList, Unbound};
use stagger_types::{Dim2, Dim3, FieldKindId, SimDim, VectorOffsets, float2};

/// Places every vector component at the cell centre.
#[derive(Debug, Clone, Copy, Default)]
struct CentredCell;

#[derive(Debug, Clone, Copy, Default)]
struct CentredE2;

impl Position for CentredE2 {
    type Dim = Dim2;
    type Output = VectorOffsets<Dim2>;

    const POSITIONS: Self::Output = [float2(0.5, 0.5); 3];
}

impl NumericalCellType for CentredCell {
    const NAME: &'static str = "CentredCell";
}

impl CellFieldPosition<FieldE, Dim2> for CentredCell {
    type Table = CentredE2;
}

impl<D: SimDim> CellFieldPosition<FieldTmp, D> for CentredCell {
    type Table = FieldPosition<FieldTmp, D>;
}

struct CentredConfig;

impl SimulationConfig for CentredConfig {
    type Dim = Dim2;
    type Cell = Alias<CentredCell, CellScheme>;
}

stagger_meta::plain_pair!(CentredCell);

stagger_fields::register_position!(CentredCell, FieldE, Dim2);
stagger_fields::register_position!(CentredCell, FieldTmp, Dim3);

fn main() {
    let centred = config_field_position::<CentredConfig, FieldE>();
    assert_eq!(centred, [float2(0.5, 0.5); 3]);

    let tmp = config_field_position::<CentredConfig, FieldTmp>();
    assert_eq!(tmp, field_position::<FieldTmp, Dim2>());

    let yee = config_field_position::<YeeConfig<Dim3>, FieldE>();
    assert_eq!(yee, field_position::<FieldE, Dim3>());

    let entries = <ConfigOverrides<CentredConfig> as PairList>::entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].key_is::<Alias<Unbound, CellScheme>>());
    assert!(entries[0].value_is::<Alias<CentredCell, CellScheme>>());

    let registry = stagger_fields::registry().unwrap();
    let e = registry.lookup("CentredCell", FieldKindId::E, 2).unwrap();
    assert_eq!((e.offsets)(), vec![vec![0.5, 0.5]; 3]);
    assert!(registry.lookup("CentredCell", FieldKindId::Tmp, 3).is_ok());
    assert!(registry.lookup("CentredCell", FieldKindId::B, 2).is_err());
    assert!(registry.lookup("YeeCell", FieldKindId::B, 2).is_ok());
}
