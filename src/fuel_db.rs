/// 사전 정의 연료의 LHV/GFI 테이블을 제공한다.
/// 값은 참고용이며 실제 검증/인증 값(BDN, 인증서 등)으로 대체해야 한다.

#[derive(Debug)]
pub struct FuelData {
    pub code: &'static str,
    pub name: &'static str,
    /// 저위 발열량 [MJ/t]
    pub lhv_mj_per_t: f64,
    /// 달성 GFI [gCO₂eq/MJ]
    pub gfi_g_per_mj: f64,
    pub notes: &'static str,
}

pub fn fuels() -> &'static [FuelData] {
    FUELS
}

pub fn find_fuel(code: &str) -> Option<&'static FuelData> {
    FUELS
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(code) || f.name.eq_ignore_ascii_case(code))
}

const FUELS: &[FuelData] = &[
    FuelData {
        code: "HFO",
        name: "Heavy Fuel Oil",
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 91.00,
        notes: "잔사유; WtW 기준 대표값",
    },
    FuelData {
        code: "LNG",
        name: "Liquefied Natural Gas",
        lhv_mj_per_t: 49_000.0,
        gfi_g_per_mj: 68.00,
        notes: "메탄 슬립 포함 대표값",
    },
    FuelData {
        code: "B24",
        name: "B24 Biofuel Blend",
        lhv_mj_per_t: 41_500.0,
        gfi_g_per_mj: 75.00,
        notes: "바이오 24% 혼합유",
    },
    FuelData {
        code: "B100",
        name: "Bio-Diesel (B100)",
        lhv_mj_per_t: 37_000.0,
        gfi_g_per_mj: 14.50,
        notes: "지속가능성 인증 전제 대표값",
    },
    FuelData {
        code: "e-Diesel",
        name: "e-Diesel",
        lhv_mj_per_t: 42_700.0,
        gfi_g_per_mj: 10.00,
        notes: "재생 전력 기반 합성 디젤",
    },
    FuelData {
        code: "e-Ammonia",
        name: "e-Ammonia",
        lhv_mj_per_t: 18_600.0,
        gfi_g_per_mj: 3.00,
        notes: "재생 전력 기반 암모니아",
    },
    FuelData {
        code: "bio-Methanol",
        name: "bio-Methanol",
        lhv_mj_per_t: 19_900.0,
        gfi_g_per_mj: 5.00,
        notes: "바이오매스 기반 메탄올",
    },
];

// NOTE:
// - LHV/GFI values are nominal well-to-wake reference figures commonly used in MEPC 83 cost studies; actual compliance uses certified values per fuel batch.
// - The catalog is reference data, not part of the calculation contract; entries can be swapped without touching the calculator.
