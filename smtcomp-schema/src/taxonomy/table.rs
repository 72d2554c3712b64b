//! Competition table for the 2024 edition: which logics each division of each
//! track contains.
//!
//! The table is authoritative. A logic listed under two divisions of the same
//! track is intentional.

use super::{Division, Logic, Track};

pub(super) static TABLE: &[(Track, &[(Division, &[Logic])])] = &[
    (
        Track::SingleQuery,
        &[
            (Division::QF_Datatypes, &[Logic::QF_DT, Logic::QF_UFDT]),
            (Division::QF_Equality, &[Logic::QF_AX, Logic::QF_UF]),
            (
                Division::QF_Equality_LinearArith,
                &[
                    Logic::QF_ALIA,
                    Logic::QF_AUFLIA,
                    Logic::QF_UFDTLIA,
                    Logic::QF_UFDTLIRA,
                    Logic::QF_UFIDL,
                    Logic::QF_UFLIA,
                    Logic::QF_UFLRA,
                ],
            ),
            (
                Division::QF_Equality_NonLinearArith,
                &[
                    Logic::QF_ANIA,
                    Logic::QF_AUFNIA,
                    Logic::QF_UFDTNIA,
                    Logic::QF_UFNIA,
                    Logic::QF_UFNRA,
                ],
            ),
            (
                Division::QF_Equality_Bitvec,
                &[
                    Logic::QF_ABV,
                    Logic::QF_AUFBV,
                    Logic::QF_UFBV,
                    Logic::QF_UFBVDT,
                ],
            ),
            (Division::QF_LinearIntArith, &[Logic::QF_IDL, Logic::QF_LIA, Logic::QF_LIRA]),
            (Division::QF_LinearRealArith, &[Logic::QF_LRA, Logic::QF_RDL]),
            (Division::QF_Bitvec, &[Logic::QF_BV]),
            (
                Division::QF_FPArith,
                &[
                    Logic::QF_ABVFP,
                    Logic::QF_ABVFPLRA,
                    Logic::QF_AUFBVFP,
                    Logic::QF_BVFP,
                    Logic::QF_BVFPLRA,
                    Logic::QF_FP,
                    Logic::QF_FPLRA,
                    Logic::QF_UFFP,
                    Logic::QF_UFFPDTNIRA,
                ],
            ),
            (Division::QF_NonLinearIntArith, &[Logic::QF_NIA, Logic::QF_NIRA]),
            (Division::QF_NonLinearRealArith, &[Logic::QF_NRA]),
            (Division::QF_Strings, &[Logic::QF_S, Logic::QF_SLIA, Logic::QF_SNIA]),
            (Division::Equality, &[Logic::UF, Logic::UFDT]),
            (
                Division::Equality_LinearArith,
                &[
                    Logic::ALIA,
                    Logic::AUFDTLIA,
                    Logic::AUFDTLIRA,
                    Logic::AUFLIA,
                    Logic::AUFLIRA,
                    Logic::UFDTLIA,
                    Logic::UFDTLIRA,
                    Logic::UFIDL,
                    Logic::UFLIA,
                    Logic::UFLRA,
                ],
            ),
            (
                Division::Equality_MachineArith,
                &[
                    Logic::ABV,
                    Logic::ABVFP,
                    Logic::ABVFPLRA,
                    Logic::AUFBV,
                    Logic::AUFBVDTLIA,
                    Logic::AUFBVDTNIA,
                    Logic::AUFBVDTNIRA,
                    Logic::AUFBVFP,
                    Logic::AUFFPDTNIRA,
                    Logic::UFBV,
                    Logic::UFBVDT,
                    Logic::UFBVFP,
                    Logic::UFBVLIA,
                    Logic::UFFPDTNIRA,
                ],
            ),
            (
                Division::Equality_NonLinearArith,
                &[
                    Logic::ANIA,
                    Logic::AUFDTNIRA,
                    Logic::AUFNIA,
                    Logic::AUFNIRA,
                    Logic::UFDTNIA,
                    Logic::UFDTNIRA,
                    Logic::UFNIA,
                ],
            ),
            (Division::Arith, &[Logic::LIA, Logic::LRA, Logic::NIA, Logic::NRA]),
            (Division::Bitvec, &[Logic::BV]),
            (Division::FPArith, &[Logic::BVFP, Logic::BVFPLRA, Logic::FP, Logic::FPLRA]),
        ],
    ),
    (
        Track::Incremental,
        &[
            (Division::QF_Equality, &[Logic::QF_UF]),
            (
                Division::QF_Equality_LinearArith,
                &[
                    Logic::QF_ALIA,
                    Logic::QF_AUFLIA,
                    Logic::QF_UFLIA,
                    Logic::QF_UFLRA,
                ],
            ),
            (
                Division::QF_Equality_NonLinearArith,
                &[
                    Logic::QF_ANIA,
                    Logic::QF_UFNIA,
                    Logic::QF_UFNRA,
                ],
            ),
            (Division::QF_Equality_Bitvec, &[Logic::QF_ABV, Logic::QF_AUFBV, Logic::QF_UFBV]),
            (
                Division::QF_Equality_Bitvec_Arith,
                &[
                    Logic::QF_AUFBVLIA,
                    Logic::QF_AUFBVNIA,
                    Logic::QF_UFBVLIA,
                ],
            ),
            (Division::QF_LinearIntArith, &[Logic::QF_LIA]),
            (Division::QF_LinearRealArith, &[Logic::QF_LRA]),
            (Division::QF_Bitvec, &[Logic::QF_BV]),
            (
                Division::QF_FPArith,
                &[
                    Logic::QF_ABVFP,
                    Logic::QF_ABVFPLRA,
                    Logic::QF_BVFP,
                    Logic::QF_BVFPLRA,
                    Logic::QF_FP,
                    Logic::QF_UFFP,
                ],
            ),
            (Division::QF_NonLinearIntArith, &[Logic::QF_NIA]),
            (Division::Equality, &[Logic::UF]),
            (Division::Equality_LinearArith, &[Logic::ALIA, Logic::UFLRA]),
            (Division::Equality_MachineArith, &[Logic::ABVFPLRA]),
            (
                Division::Equality_NonLinearArith,
                &[
                    Logic::ANIA,
                    Logic::AUFNIRA,
                    Logic::UFDTNIA,
                    Logic::UFNIA,
                    Logic::UFNRA,
                ],
            ),
            (Division::Arith, &[Logic::LIA, Logic::LRA]),
            (Division::Bitvec, &[Logic::BV]),
            (Division::FPArith, &[Logic::BVFP, Logic::BVFPLRA]),
        ],
    ),
    (
        Track::UnsatCore,
        &[
            (Division::QF_Datatypes, &[Logic::QF_DT, Logic::QF_UFDT]),
            (Division::QF_Equality, &[Logic::QF_AX, Logic::QF_UF]),
            (
                Division::QF_Equality_LinearArith,
                &[
                    Logic::QF_ALIA,
                    Logic::QF_AUFLIA,
                    Logic::QF_UFDTLIA,
                    Logic::QF_UFDTLIRA,
                    Logic::QF_UFIDL,
                    Logic::QF_UFLIA,
                    Logic::QF_UFLRA,
                ],
            ),
            (
                Division::QF_Equality_NonLinearArith,
                &[
                    Logic::QF_ANIA,
                    Logic::QF_AUFNIA,
                    Logic::QF_UFDTNIA,
                    Logic::QF_UFNIA,
                    Logic::QF_UFNRA,
                ],
            ),
            (
                Division::QF_Equality_Bitvec,
                &[
                    Logic::QF_ABV,
                    Logic::QF_AUFBV,
                    Logic::QF_UFBV,
                    Logic::QF_UFBVDT,
                ],
            ),
            (Division::QF_LinearIntArith, &[Logic::QF_IDL, Logic::QF_LIA, Logic::QF_LIRA]),
            (Division::QF_LinearRealArith, &[Logic::QF_LRA, Logic::QF_RDL]),
            (Division::QF_Bitvec, &[Logic::QF_BV]),
            (
                Division::QF_FPArith,
                &[
                    Logic::QF_ABVFP,
                    Logic::QF_ABVFPLRA,
                    Logic::QF_AUFBVFP,
                    Logic::QF_BVFP,
                    Logic::QF_BVFPLRA,
                    Logic::QF_FP,
                    Logic::QF_FPLRA,
                    Logic::QF_UFFP,
                    Logic::QF_UFFPDTNIRA,
                ],
            ),
            (Division::QF_NonLinearIntArith, &[Logic::QF_NIA, Logic::QF_NIRA]),
            (Division::QF_NonLinearRealArith, &[Logic::QF_NRA]),
            (Division::QF_Strings, &[Logic::QF_S, Logic::QF_SLIA, Logic::QF_SNIA]),
            (Division::Equality, &[Logic::UF, Logic::UFDT]),
            (
                Division::Equality_LinearArith,
                &[
                    Logic::ALIA,
                    Logic::AUFDTLIA,
                    Logic::AUFDTLIRA,
                    Logic::AUFLIA,
                    Logic::AUFLIRA,
                    Logic::UFDTLIA,
                    Logic::UFDTLIRA,
                    Logic::UFIDL,
                    Logic::UFLIA,
                    Logic::UFLRA,
                ],
            ),
            (
                Division::Equality_MachineArith,
                &[
                    Logic::ABV,
                    Logic::ABVFP,
                    Logic::ABVFPLRA,
                    Logic::AUFBV,
                    Logic::AUFBVDTLIA,
                    Logic::AUFBVDTNIA,
                    Logic::AUFBVDTNIRA,
                    Logic::AUFBVFP,
                    Logic::AUFFPDTNIRA,
                    Logic::UFBV,
                    Logic::UFBVDT,
                    Logic::UFBVFP,
                    Logic::UFBVLIA,
                    Logic::UFFPDTNIRA,
                ],
            ),
            (
                Division::Equality_NonLinearArith,
                &[
                    Logic::ANIA,
                    Logic::AUFDTNIRA,
                    Logic::AUFNIA,
                    Logic::AUFNIRA,
                    Logic::UFDTNIA,
                    Logic::UFDTNIRA,
                    Logic::UFNIA,
                ],
            ),
            (Division::Arith, &[Logic::LIA, Logic::LRA, Logic::NIA, Logic::NRA]),
            (Division::Bitvec, &[Logic::BV]),
            (Division::FPArith, &[Logic::BVFP, Logic::BVFPLRA, Logic::FP, Logic::FPLRA]),
        ],
    ),
    (
        Track::ModelValidation,
        &[
            (Division::QF_Datatypes, &[Logic::QF_DT, Logic::QF_UFDT]),
            (Division::QF_Equality, &[Logic::QF_UF]),
            (
                Division::QF_Equality_LinearArith,
                &[
                    Logic::QF_UFIDL,
                    Logic::QF_UFLIA,
                    Logic::QF_UFLRA,
                ],
            ),
            (
                Division::QF_Equality_NonLinearArith,
                &[
                    Logic::QF_ANIA,
                    Logic::QF_AUFNIA,
                    Logic::QF_UFDTNIA,
                    Logic::QF_UFNIA,
                    Logic::QF_UFNRA,
                ],
            ),
            (Division::QF_Equality_Bitvec, &[Logic::QF_UFBV]),
            (Division::QF_ADT_BitVec, &[Logic::QF_ABV, Logic::QF_AUFBV, Logic::QF_UFBVDT]),
            (
                Division::QF_ADT_LinArith,
                &[
                    Logic::QF_ALIA,
                    Logic::QF_AUFLIA,
                    Logic::QF_AX,
                    Logic::QF_UFDTLIA,
                    Logic::QF_UFDTLIRA,
                ],
            ),
            (Division::QF_LinearIntArith, &[Logic::QF_IDL, Logic::QF_LIA, Logic::QF_LIRA]),
            (Division::QF_LinearRealArith, &[Logic::QF_LRA, Logic::QF_RDL]),
            (Division::QF_Bitvec, &[Logic::QF_BV]),
            (
                Division::QF_FPArith,
                &[
                    Logic::QF_ABVFP,
                    Logic::QF_ABVFPLRA,
                    Logic::QF_AUFBVFP,
                    Logic::QF_BVFP,
                    Logic::QF_BVFPLRA,
                    Logic::QF_FP,
                    Logic::QF_FPLRA,
                    Logic::QF_UFFP,
                    Logic::QF_UFFPDTNIRA,
                ],
            ),
            (Division::QF_NonLinearIntArith, &[Logic::QF_NIA, Logic::QF_NIRA]),
            (Division::QF_NonLinearRealArith, &[Logic::QF_NRA]),
        ],
    ),
    (
        Track::ProofExhibition,
        &[
            (Division::QF_Datatypes, &[Logic::QF_DT, Logic::QF_UFDT]),
            (Division::QF_Equality, &[Logic::QF_AX, Logic::QF_UF]),
            (
                Division::QF_Equality_LinearArith,
                &[
                    Logic::QF_ALIA,
                    Logic::QF_AUFLIA,
                    Logic::QF_UFDTLIA,
                    Logic::QF_UFDTLIRA,
                    Logic::QF_UFIDL,
                    Logic::QF_UFLIA,
                    Logic::QF_UFLRA,
                ],
            ),
            (
                Division::QF_Equality_NonLinearArith,
                &[
                    Logic::QF_ANIA,
                    Logic::QF_AUFNIA,
                    Logic::QF_UFDTNIA,
                    Logic::QF_UFNIA,
                    Logic::QF_UFNRA,
                ],
            ),
            (
                Division::QF_Equality_Bitvec,
                &[
                    Logic::QF_ABV,
                    Logic::QF_AUFBV,
                    Logic::QF_UFBV,
                    Logic::QF_UFBVDT,
                ],
            ),
            (Division::QF_LinearIntArith, &[Logic::QF_IDL, Logic::QF_LIA, Logic::QF_LIRA]),
            (Division::QF_LinearRealArith, &[Logic::QF_LRA, Logic::QF_RDL]),
            (Division::QF_Bitvec, &[Logic::QF_BV]),
            (
                Division::QF_FPArith,
                &[
                    Logic::QF_ABVFP,
                    Logic::QF_ABVFPLRA,
                    Logic::QF_AUFBVFP,
                    Logic::QF_BVFP,
                    Logic::QF_BVFPLRA,
                    Logic::QF_FP,
                    Logic::QF_FPLRA,
                    Logic::QF_UFFP,
                    Logic::QF_UFFPDTNIRA,
                ],
            ),
            (Division::QF_NonLinearIntArith, &[Logic::QF_NIA, Logic::QF_NIRA]),
            (Division::QF_NonLinearRealArith, &[Logic::QF_NRA]),
            (Division::QF_Strings, &[Logic::QF_S, Logic::QF_SLIA, Logic::QF_SNIA]),
            (Division::Equality, &[Logic::UF, Logic::UFDT]),
            (
                Division::Equality_LinearArith,
                &[
                    Logic::ALIA,
                    Logic::AUFDTLIA,
                    Logic::AUFDTLIRA,
                    Logic::AUFLIA,
                    Logic::AUFLIRA,
                    Logic::UFDTLIA,
                    Logic::UFDTLIRA,
                    Logic::UFIDL,
                    Logic::UFLIA,
                    Logic::UFLRA,
                ],
            ),
            (
                Division::Equality_MachineArith,
                &[
                    Logic::ABV,
                    Logic::ABVFP,
                    Logic::ABVFPLRA,
                    Logic::AUFBV,
                    Logic::AUFBVDTLIA,
                    Logic::AUFBVDTNIA,
                    Logic::AUFBVDTNIRA,
                    Logic::AUFBVFP,
                    Logic::AUFFPDTNIRA,
                    Logic::UFBV,
                    Logic::UFBVDT,
                    Logic::UFBVFP,
                    Logic::UFBVLIA,
                    Logic::UFFPDTNIRA,
                ],
            ),
            (
                Division::Equality_NonLinearArith,
                &[
                    Logic::ANIA,
                    Logic::AUFDTNIRA,
                    Logic::AUFNIA,
                    Logic::AUFNIRA,
                    Logic::UFDTNIA,
                    Logic::UFDTNIRA,
                    Logic::UFNIA,
                ],
            ),
            (Division::Arith, &[Logic::LIA, Logic::LRA, Logic::NIA, Logic::NRA]),
            (Division::Bitvec, &[Logic::BV]),
            (Division::FPArith, &[Logic::BVFP, Logic::BVFPLRA, Logic::FP, Logic::FPLRA]),
        ],
    ),
    (
        Track::Cloud,
        &[
            (Division::QF_Datatypes, &[Logic::QF_DT, Logic::QF_UFDT]),
            (Division::QF_Equality, &[Logic::QF_AX, Logic::QF_UF]),
            (
                Division::QF_Equality_LinearArith,
                &[
                    Logic::QF_ALIA,
                    Logic::QF_AUFLIA,
                    Logic::QF_UFDTLIA,
                    Logic::QF_UFDTLIRA,
                    Logic::QF_UFIDL,
                    Logic::QF_UFLIA,
                    Logic::QF_UFLRA,
                ],
            ),
            (
                Division::QF_Equality_NonLinearArith,
                &[
                    Logic::QF_ANIA,
                    Logic::QF_AUFNIA,
                    Logic::QF_UFDTNIA,
                    Logic::QF_UFNIA,
                    Logic::QF_UFNRA,
                ],
            ),
            (
                Division::QF_Equality_Bitvec,
                &[
                    Logic::QF_ABV,
                    Logic::QF_AUFBV,
                    Logic::QF_UFBV,
                    Logic::QF_UFBVDT,
                ],
            ),
            (Division::QF_LinearIntArith, &[Logic::QF_IDL, Logic::QF_LIA, Logic::QF_LIRA]),
            (Division::QF_LinearRealArith, &[Logic::QF_LRA, Logic::QF_RDL]),
            (Division::QF_Bitvec, &[Logic::QF_BV]),
            (
                Division::QF_FPArith,
                &[
                    Logic::QF_ABVFP,
                    Logic::QF_ABVFPLRA,
                    Logic::QF_AUFBVFP,
                    Logic::QF_BVFP,
                    Logic::QF_BVFPLRA,
                    Logic::QF_FP,
                    Logic::QF_FPLRA,
                    Logic::QF_UFFP,
                    Logic::QF_UFFPDTNIRA,
                ],
            ),
            (Division::QF_NonLinearIntArith, &[Logic::QF_NIA, Logic::QF_NIRA]),
            (Division::QF_NonLinearRealArith, &[Logic::QF_NRA]),
            (Division::QF_Strings, &[Logic::QF_S, Logic::QF_SLIA, Logic::QF_SNIA]),
            (Division::Equality, &[Logic::UF, Logic::UFDT]),
            (
                Division::Equality_LinearArith,
                &[
                    Logic::ALIA,
                    Logic::AUFDTLIA,
                    Logic::AUFDTLIRA,
                    Logic::AUFLIA,
                    Logic::AUFLIRA,
                    Logic::UFDTLIA,
                    Logic::UFDTLIRA,
                    Logic::UFIDL,
                    Logic::UFLIA,
                    Logic::UFLRA,
                ],
            ),
            (
                Division::Equality_MachineArith,
                &[
                    Logic::ABV,
                    Logic::ABVFP,
                    Logic::ABVFPLRA,
                    Logic::AUFBV,
                    Logic::AUFBVDTLIA,
                    Logic::AUFBVDTNIA,
                    Logic::AUFBVDTNIRA,
                    Logic::AUFBVFP,
                    Logic::AUFFPDTNIRA,
                    Logic::UFBV,
                    Logic::UFBVDT,
                    Logic::UFBVFP,
                    Logic::UFBVLIA,
                    Logic::UFFPDTNIRA,
                ],
            ),
            (
                Division::Equality_NonLinearArith,
                &[
                    Logic::ANIA,
                    Logic::AUFDTNIRA,
                    Logic::AUFNIA,
                    Logic::AUFNIRA,
                    Logic::UFDTNIA,
                    Logic::UFDTNIRA,
                    Logic::UFNIA,
                ],
            ),
            (Division::Arith, &[Logic::LIA, Logic::LRA, Logic::NIA, Logic::NRA]),
            (Division::Bitvec, &[Logic::BV]),
            (Division::FPArith, &[Logic::BVFP, Logic::BVFPLRA, Logic::FP, Logic::FPLRA]),
        ],
    ),
    (
        Track::Parallel,
        &[
            (Division::QF_Datatypes, &[Logic::QF_DT, Logic::QF_UFDT]),
            (Division::QF_Equality, &[Logic::QF_AX, Logic::QF_UF]),
            (
                Division::QF_Equality_LinearArith,
                &[
                    Logic::QF_ALIA,
                    Logic::QF_AUFLIA,
                    Logic::QF_UFDTLIA,
                    Logic::QF_UFDTLIRA,
                    Logic::QF_UFIDL,
                    Logic::QF_UFLIA,
                    Logic::QF_UFLRA,
                ],
            ),
            (
                Division::QF_Equality_NonLinearArith,
                &[
                    Logic::QF_ANIA,
                    Logic::QF_AUFNIA,
                    Logic::QF_UFDTNIA,
                    Logic::QF_UFNIA,
                    Logic::QF_UFNRA,
                ],
            ),
            (
                Division::QF_Equality_Bitvec,
                &[
                    Logic::QF_ABV,
                    Logic::QF_AUFBV,
                    Logic::QF_UFBV,
                    Logic::QF_UFBVDT,
                ],
            ),
            (Division::QF_LinearIntArith, &[Logic::QF_IDL, Logic::QF_LIA, Logic::QF_LIRA]),
            (Division::QF_LinearRealArith, &[Logic::QF_LRA, Logic::QF_RDL]),
            (Division::QF_Bitvec, &[Logic::QF_BV]),
            (
                Division::QF_FPArith,
                &[
                    Logic::QF_ABVFP,
                    Logic::QF_ABVFPLRA,
                    Logic::QF_AUFBVFP,
                    Logic::QF_BVFP,
                    Logic::QF_BVFPLRA,
                    Logic::QF_FP,
                    Logic::QF_FPLRA,
                    Logic::QF_UFFP,
                    Logic::QF_UFFPDTNIRA,
                ],
            ),
            (Division::QF_NonLinearIntArith, &[Logic::QF_NIA, Logic::QF_NIRA]),
            (Division::QF_NonLinearRealArith, &[Logic::QF_NRA]),
            (Division::QF_Strings, &[Logic::QF_S, Logic::QF_SLIA, Logic::QF_SNIA]),
            (Division::Equality, &[Logic::UF, Logic::UFDT]),
            (
                Division::Equality_LinearArith,
                &[
                    Logic::ALIA,
                    Logic::AUFDTLIA,
                    Logic::AUFDTLIRA,
                    Logic::AUFLIA,
                    Logic::AUFLIRA,
                    Logic::UFDTLIA,
                    Logic::UFDTLIRA,
                    Logic::UFIDL,
                    Logic::UFLIA,
                    Logic::UFLRA,
                ],
            ),
            (
                Division::Equality_MachineArith,
                &[
                    Logic::ABV,
                    Logic::ABVFP,
                    Logic::ABVFPLRA,
                    Logic::AUFBV,
                    Logic::AUFBVDTLIA,
                    Logic::AUFBVDTNIA,
                    Logic::AUFBVDTNIRA,
                    Logic::AUFBVFP,
                    Logic::AUFFPDTNIRA,
                    Logic::UFBV,
                    Logic::UFBVDT,
                    Logic::UFBVFP,
                    Logic::UFBVLIA,
                    Logic::UFFPDTNIRA,
                ],
            ),
            (
                Division::Equality_NonLinearArith,
                &[
                    Logic::ANIA,
                    Logic::AUFDTNIRA,
                    Logic::AUFNIA,
                    Logic::AUFNIRA,
                    Logic::UFDTNIA,
                    Logic::UFDTNIRA,
                    Logic::UFNIA,
                ],
            ),
            (Division::Arith, &[Logic::LIA, Logic::LRA, Logic::NIA, Logic::NRA]),
            (Division::Bitvec, &[Logic::BV]),
            (Division::FPArith, &[Logic::BVFP, Logic::BVFPLRA, Logic::FP, Logic::FPLRA]),
        ],
    ),
];
