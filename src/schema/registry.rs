use indexmap::IndexMap;

use super::field::{FieldConfig, FieldType, OptionsSource, Rule};

/// Side worksheet holding the lookup columns for dynamic select fields.
pub const LISTAS_SHEET: &str = "LISTAS";

/// Static description of one worksheet: column layout, form fields and
/// the paperwork columns offered for copying.
#[derive(Debug, Clone, Copy)]
pub struct SheetSchema {
    pub name: &'static str,
    /// Every column of the sheet, in sheet order. The first one is the
    /// row identifier used by update/delete lookups.
    pub full_columns: &'static [&'static str],
    /// Display/filter subset of `full_columns`.
    pub view_columns: &'static [&'static str],
    /// Form fields, in form order. Columns without a field entry are
    /// written as empty strings (formula columns, derived columns).
    pub fields: &'static [FieldConfig],
    /// Columns carrying pre-assembled paperwork text, offered as
    /// copy shortcuts when a row is selected.
    pub copy_columns: &'static [&'static str],
}

impl SheetSchema {
    pub fn id_column(&self) -> Option<&'static str> {
        self.full_columns.first().copied()
    }

    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Read-only registry of every known worksheet, in workbook order.
pub struct Registry {
    sheets: IndexMap<&'static str, SheetSchema>,
}

impl Registry {
    pub fn builtin() -> Self {
        Registry {
            sheets: SHEETS.iter().map(|s| (s.name, *s)).collect(),
        }
    }

    pub fn schema(&self, sheet: &str) -> Option<&SheetSchema> {
        self.sheets.get(sheet)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sheets.keys().copied()
    }

    /// Full column list for a sheet; unknown sheets read as empty.
    pub fn full_columns(&self, sheet: &str) -> &'static [&'static str] {
        self.schema(sheet).map(|s| s.full_columns).unwrap_or(&[])
    }

    pub fn view_columns(&self, sheet: &str) -> &'static [&'static str] {
        self.schema(sheet).map(|s| s.view_columns).unwrap_or(&[])
    }

    /// Field configs for a sheet; unknown sheets read as empty.
    pub fn fields(&self, sheet: &str) -> &'static [FieldConfig] {
        self.schema(sheet).map(|s| s.fields).unwrap_or(&[])
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

// Field shorthands. The registry below is data, not logic; these keep it
// close to one line per field.

const fn text(name: &'static str) -> FieldConfig {
    FieldConfig::new(name, FieldType::text())
}

const fn area(name: &'static str) -> FieldConfig {
    FieldConfig::new(name, FieldType::TextArea)
}

const fn date(name: &'static str) -> FieldConfig {
    FieldConfig::new(name, FieldType::date())
}

const fn date_from(name: &'static str, min_year: i32) -> FieldConfig {
    FieldConfig::new(name, FieldType::date_from(min_year))
}

const fn time(name: &'static str) -> FieldConfig {
    FieldConfig::new(name, FieldType::Time)
}

const fn select(name: &'static str, options: &'static [&'static str]) -> FieldConfig {
    FieldConfig::new(name, FieldType::Select(OptionsSource::Static(options)))
}

const fn lookup(name: &'static str, range: &'static str) -> FieldConfig {
    FieldConfig::new(name, FieldType::Select(OptionsSource::Lookup { range }))
}

const fn numeric(name: &'static str) -> FieldConfig {
    FieldConfig::with_rule(name, FieldType::text(), Rule::Numeric)
}

/// Case file number, the identifier on most sheets.
const fn expediente() -> FieldConfig {
    FieldConfig::new("EXPEDIENTE", FieldType::text_max(40))
}

/// Five-digit credential number, present on almost every sheet.
const fn cred() -> FieldConfig {
    FieldConfig::with_rule("CRED.", FieldType::text(), Rule::Digits(5))
}

const YES_NO: &[&str] = &["SI", "NO"];

const CERT_DAYS: FieldConfig = FieldConfig::with_rule(
    "CANTIDAD DE DIAS (ULTIMO CERTIFICADO)",
    FieldType::text(),
    Rule::NumericMax(30),
);

static SHEETS: &[SheetSchema] = &[
    SheetSchema {
        name: "DOTACION",
        full_columns: DOTACION_COLUMNS,
        view_columns: DOTACION_COLUMNS,
        fields: &[
            lookup("GRADO", "K1:K17"),
            text("APELLIDOS"),
            text("NOMBRES"),
            cred(),
            select(
                "SITUACION",
                &[
                    "PRESENTE",
                    "EGRESADO",
                    "PENDIENTE DE PRESENTACION",
                    "PENDIENTE DE NOTIFICACION",
                ],
            ),
            select("MASC / FEM", &["MASCULINO", "FEMENINO"]),
            date_from("INGRESO", 1993),
            text("DISP. ING."),
            date_from("FECHA DISP. ING", 1993),
            date_from("FECHA ING. C.P.F.NOA", 2011),
            text("DISP."),
            date_from("FECHA DE LA DISP.", 2011),
            // Birth and marriage dates are deliberately unbounded.
            date("FECHA NAC."),
            FieldConfig::with_rule("D.N.I.", FieldType::text(), Rule::Digits(8)),
            FieldConfig::with_rule("C.U.I.L.", FieldType::text(), Rule::TaxId),
            select(
                "ESTADO CIVIL",
                &[
                    "SOLTERO",
                    "CASADO",
                    "UNION CONVIVENCIAL",
                    "DIVORCIADO/A",
                    "VIUDO/A",
                ],
            ),
            date("FECHA CASAM."),
            text("DEST. ANT. UNIDAD"),
            lookup("ESCALAFON", "N1:N13"),
            text("PROFESION"),
            text("DOMICILIO"),
            text("LOCALIDAD"),
            text("PROVINCIA"),
            numeric("TELEFONO"),
            text("USUARIO G.D.E."),
            text("CORREO ELEC"),
        ],
        copy_columns: &[
            "RADIOGRAMA DE PRESENTACION (NOTA)",
            "ACTA DE NOTIFICACION POR TRASLADO (ACTFC)",
            "RADIOGRAMA DE NOTIFICACION (NOTA)",
            "REMISION DE D.L.P. (NOTA)",
            "SITUACION DE REVISTA (SOLO WORD)",
        ],
    },
    SheetSchema {
        name: "FUNCIONES",
        full_columns: FUNCIONES_COLUMNS,
        view_columns: FUNCIONES_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            lookup("JEFATURA / DIRECCION", "A1:A89"),
            lookup("DIVISION / DEPARTAMENTO", "B1:B89"),
            text("SECCION"),
            lookup("CARGO", "C1:C89"),
            text("FUNCION DEL B.P.N 700"),
            text("ORDEN INTERNA"),
            date("A PARTIR DE"),
            select("CAMBIO DE DEPENDENCIA", YES_NO),
            select(
                "TITULAR – INTERINO - A CARGO",
                &["TITULAR", "INTERINO", "A CARGO"],
            ),
            time("HORARIO"),
            select("TURNO", &["A", "B", "C", "D", "NINGUNO"]),
        ],
        copy_columns: &[
            "ORDENATIVA (ORDEN)",
            "ARTICULO",
            "ELEVACION (INFFC)",
            "ARCHIVO",
            "ANOTACION D.L.P.",
        ],
    },
    SheetSchema {
        name: "SANCION",
        full_columns: SANCION_COLUMNS,
        view_columns: SANCION_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            date("FECHA DE LA FALTA"),
            date("FECHA DE NOTIFICACION"),
            text("ART."),
            select(
                "TIPO DE SANCION",
                &["APERCIBIMIENTO", "ARRESTO", "SUSPENCION", "BAJA"],
            ),
            numeric("DIAS DE ARRESTO"),
        ],
        copy_columns: &[],
    },
    SheetSchema {
        name: "DOMICILIOS",
        full_columns: DOMICILIOS_COLUMNS,
        view_columns: DOMICILIOS_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            date("FECHA DE CAMBIO"),
            text("DOMICILIO"),
            text("LOCALIDAD"),
            text("PROVINCIA"),
        ],
        copy_columns: &[],
    },
    SheetSchema {
        name: "CURSOS",
        full_columns: CURSOS_COLUMNS,
        view_columns: CURSOS_COLUMNS,
        fields: &[expediente(), cred(), text("CURSO")],
        copy_columns: &[],
    },
    SheetSchema {
        name: "SOLICITUD DE PASES",
        full_columns: PASES_COLUMNS,
        view_columns: PASES_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            select("TIPO DE PASE", &["PASE", "PERMUTA", "ADSCRIPCION"]),
            text("NOMBRE DE LA PERMUTA"),
            text("DESTINO"),
        ],
        copy_columns: &[],
    },
    SheetSchema {
        name: "DISPONIBILIDAD",
        full_columns: DISPONIBILIDAD_COLUMNS,
        view_columns: DISPONIBILIDAD_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            date("DESDE"),
            numeric("DIAS"),
            date("FINALIZACION"),
        ],
        copy_columns: &[],
    },
    SheetSchema {
        name: "LICENCIAS",
        full_columns: LICENCIAS_COLUMNS,
        view_columns: LICENCIAS_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            lookup("TIPO DE LIC", "E1:E30"),
            numeric("DIAS"),
            date("DESDE"),
            numeric("AÑO"),
            select("PASAJES", YES_NO),
            numeric("DIAS POR VIAJE"),
            text("LUGAR"),
        ],
        copy_columns: &[
            "SITUACION DE REVISTA LICENCIA (INFFC)",
            "ORDENATIVA (ORDEN)",
            "CONTROL DE DOCUMENTACION (INFFC)",
            "ARCHIVO (IF)",
        ],
    },
    SheetSchema {
        name: "LACTANCIA",
        full_columns: LACTANCIA_COLUMNS,
        view_columns: LACTANCIA_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            text("NOMBRE COMPLETO HIJO/A"),
            date("FECHA DE NACIMIENTO"),
            text("EXPEDIENTE DONDE LO INFORMO"),
            date("FECHAS"),
            date("PRORROGA FECHA"),
        ],
        copy_columns: &[],
    },
    SheetSchema {
        name: "PARTE DE ENFERMO",
        full_columns: PARTE_ENFERMO_COLUMNS,
        view_columns: PARTE_ENFERMO_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            date("INICIO"),
            date("DESDE (ULTIMO CERTIFICADO)"),
            CERT_DAYS,
            date("FINALIZACION"),
            select("CUMPLE 1528??", YES_NO),
            text("CODIGO DE AFECC."),
        ],
        copy_columns: &[
            "SITUACION DE REVISTA (INFFC)",
            "SOLICITUD DE CERTIFICADO (INFFC)",
            "ORDENATIVA (ORDEN)",
            "ARCHIVO (IF)",
            "SITUACION DE REVISTA ELEVACION P.E.L.E. (INFFC)",
            "ELVACION P.E.L.E. (IF)",
        ],
    },
    SheetSchema {
        name: "PARTE DE ASISTENCIA FAMILIAR",
        full_columns: PARTE_FAMILIAR_COLUMNS,
        view_columns: PARTE_FAMILIAR_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            date("INICIO"),
            date("DESDE (ULTIMO CERTIFICADO)"),
            CERT_DAYS,
            date("FINALIZACION"),
            select("CUMPLE 1528??", YES_NO),
            text("CODIGO DE AFECC."),
        ],
        copy_columns: &[
            "SITUACION DE REVISTA (INFFC)",
            "INFORMAR FAMILIAR (INFFC)",
            "SOLICITUD DE CERTIFICADO (INFFC)",
            "ORDENATIVA (ORDEN)",
            "ARCHIVO (IF)",
            "SITUACION DE REVISTA ELEVACION P.A.F. (INFFC)",
            "ELVACION P.A.F. (IF)",
        ],
    },
    SheetSchema {
        name: "ACCIDENTE DE SERVICIO",
        full_columns: ACCIDENTE_COLUMNS,
        view_columns: ACCIDENTE_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            date("INICIO"),
            date("DESDE (ULTIMO CERTIFICADO)"),
            CERT_DAYS,
            date("FINALIZACION"),
            area("OBSERVACION"),
        ],
        copy_columns: &[
            "SITUACION DE REVISTA (INFFC)",
            "ELVACION ACCIDENTE (IF)",
            "SITUACION DE REVISTA AUDITORIA (INFFC)",
            "PICU PARA D.L.P.",
        ],
    },
    SheetSchema {
        name: "CERTIFICADOS MEDICOS",
        full_columns: CERTIFICADOS_COLUMNS,
        view_columns: CERTIFICADOS_VIEW_COLUMNS,
        fields: &[expediente()],
        copy_columns: &[],
    },
    SheetSchema {
        name: "NOTA DE COMISION MEDICA",
        full_columns: COMISION_MEDICA_COLUMNS,
        view_columns: COMISION_MEDICA_COLUMNS,
        fields: &[
            text("NOTA DE D.RR.HH."),
            date("FECHA DE NOTA D.RR.HH."),
            area("TEXTO NOTIFICABLE DE LA NOTA"),
            cred(),
            text("EXPEDIENTE"),
            date("FECHA DE EVALUACION VIRTUAL"),
            date("FECHA DE EVALUACION PRESENCIAL"),
            date("FECHA DE REINTEGRO"),
            date("1° FECHA DE EVALUACION VIRTUAL"),
            date("2° FECHA DE EVALUACIÓN PRESENCIAL"),
        ],
        copy_columns: &[],
    },
    SheetSchema {
        name: "IMPUNTUALIDADES",
        full_columns: IMPUNTUALIDADES_COLUMNS,
        view_columns: IMPUNTUALIDADES_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            date("FECHA"),
            time("HORA DE DEBIA INGRESAR"),
            time("HORA QUE INGRESO"),
            lookup("N° DE IMPUNTUALIDAD", "I2:I16"),
        ],
        copy_columns: &[
            "SITUACION DE REVISTA IMPUNTUALIDAD (INFFC)",
            "ORDENATIVA DE IMPUNTUALIDAD (ORDEN)",
            "ARCHIVO DE IMPUNTUALIDAD (IF)",
        ],
    },
    SheetSchema {
        name: "COMPLEMENTO DE HABERES",
        full_columns: COMPLEMENTO_COLUMNS,
        view_columns: COMPLEMENTO_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            select(
                "TIPO",
                &[
                    "VARIABILIDAD DE VIVIENDA",
                    "FIJACION DE DOMICILIO",
                    "BONIFICACION POR TITULO",
                ],
            ),
        ],
        copy_columns: &[],
    },
    SheetSchema {
        name: "OFICIOS",
        full_columns: OFICIOS_COLUMNS,
        view_columns: OFICIOS_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            area("PICU_OFICIO"),
            date("FECHA del OFICIO"),
        ],
        copy_columns: &[
            "SITUACION DE REVISTA OFICIO (INFFC)",
            "SOLICITUD DE NOTIFICACION (INFFC)",
            "ELEVACION DE NOTIFICACION (INFFC)",
            "ARCHIVO IF",
            "ANOTACION D.L.P.",
        ],
    },
    SheetSchema {
        name: "NOTAS DAI",
        full_columns: NOTAS_DAI_COLUMNS,
        view_columns: NOTAS_DAI_COLUMNS,
        fields: &[
            FieldConfig::new("NOTA DAI", FieldType::text_max(40)),
            cred(),
            area("PICU_NOTA_DAI"),
            date("FECHA de NOTA DAI"),
        ],
        copy_columns: &[],
    },
    SheetSchema {
        name: "INASISTENCIAS",
        full_columns: INASISTENCIAS_COLUMNS,
        view_columns: INASISTENCIAS_COLUMNS,
        fields: &[
            expediente(),
            cred(),
            date("FECHA DE LA FALTA"),
            select("MOTIVO", &["FALTA CON AVISO", "FALTA SIN AVISO"]),
        ],
        copy_columns: &[
            "SITUACION DE REVISTA FALTA CON/SIN AVISO (INFFC)",
            "ORDENATIVA DE FALTACON/SIN AVISO (ORDEN)",
            "ARCHIVO (IF)",
        ],
    },
    SheetSchema {
        name: "MESA DE ENTRADA",
        full_columns: MESA_ENTRADA_COLUMNS,
        view_columns: MESA_ENTRADA_COLUMNS,
        // Rows arrive through the bulk-import surface, not a form.
        fields: &[],
        copy_columns: &[],
    },
];

const DOTACION_COLUMNS: &[&str] = &[
    "N°",
    "COD",
    "GRADO",
    "APELLIDOS",
    "NOMBRES",
    "CRED.",
    "SITUACION",
    "MASC / FEM",
    "INGRESO",
    "DISP. ING.",
    "FECHA DISP. ING",
    "FECHA ING. C.P.F.NOA",
    "DISP.",
    "FECHA DE LA DISP.",
    "FECHA NAC.",
    "EDAD",
    "D.N.I.",
    "C.U.I.L.",
    "ESTADO CIVIL",
    "FECHA CASAM.",
    "JEFATURA / DIRECCION",
    "DEPARTAMENTO / DIVISION SECCION",
    "FUNCION",
    "ORDEN INTERNA",
    "A PARTIR DE",
    "EXPEDIENTE DE FUNCION",
    "DEST. ANT. UNIDAD",
    "ESCALAFON",
    "PROFESION",
    "DOMICILIO",
    "LOCALIDAD",
    "PROVINCIA",
    "TELEFONO",
    "USUARIO G.D.E.",
    "CORREO ELEC",
    "REPARTICIÓN",
    "SECTOR",
    "JERARQUIA",
];

const FUNCIONES_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "JEFATURA / DIRECCION",
    "DIVISION / DEPARTAMENTO",
    "SECCION",
    "CARGO",
    "FUNCION DEL B.P.N 700",
    "ORDEN INTERNA",
    "A PARTIR DE",
    "CAMBIO DE DEPENDENCIA",
    "TITULAR – INTERINO - A CARGO",
    "HORARIO",
    "TURNO",
];

const SANCION_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "FECHA DE LA FALTA",
    "FECHA DE NOTIFICACION",
    "ART.",
    "TIPO DE SANCION",
    "DIAS DE ARRESTO",
];

const DOMICILIOS_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "FECHA DE CAMBIO",
    "DOMICILIO",
    "LOCALIDAD",
    "PROVINCIA",
];

const CURSOS_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "CURSO",
];

const PASES_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "TIPO DE PASE",
    "NOMBRE DE LA PERMUTA",
    "DESTINO",
];

const DISPONIBILIDAD_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "DESDE",
    "DIAS",
    "FINALIZACION",
];

const LICENCIAS_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRE Y APELLIDO",
    "CRED.",
    "TIPO DE LIC",
    "DIAS",
    "DESDE",
    "HASTA",
    "AÑO",
    "PASAJES",
    "DIAS POR VIAJE",
    "LUGAR",
];

const LACTANCIA_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRE Y APELLIDO",
    "CRED.",
    "NOMBRE COMPLETO HIJO/A",
    "FECHA DE NACIMIENTO",
    "EXPEDIENTE DONDE LO INFORMO",
    "FECHAS",
    "PRORROGA FECHA",
];

const PARTE_ENFERMO_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRE Y APELLIDO",
    "CRED.",
    "AÑO",
    "INICIO",
    "DESDE (ULTIMO CERTIFICADO)",
    "CANTIDAD DE DIAS (ULTIMO CERTIFICADO)",
    "HASTA (ULTIMO CERTIFICADO)",
    "FINALIZACION",
    "CUMPLE 1528??",
    "DIAS DE INASISTENCIA JUSTIFICADO",
    "DIAS DE INASISTENCIA A HOY",
    "CANTIDAD DE DIAS ANTERIORES AL TRAMITE",
    "CODIGO DE AFECC.",
    "DIVISION",
];

const PARTE_FAMILIAR_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRE Y APELLIDO",
    "CRED.",
    "AÑO",
    "INICIO",
    "DESDE (ULTIMO CERTIFICADO)",
    "CANTIDAD DE DIAS (ULTIMO CERTIFICADO)",
    "HASTA (ULTIMO CERTIFICADO)",
    "FINALIZACION",
    "CUMPLE 1528??",
    "DIAS DE INASISTENCIA JUSTIFICADO",
    "DIAS DE INASISTENCIA A HOY",
    "CANTIDAD de DIAS ANTERIORES AL TRAMITE",
    "CODIGO DE AFECC.",
    "DIVISION",
];

const ACCIDENTE_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRE Y APELLIDO",
    "CRED.",
    "AÑO",
    "INICIO",
    "DESDE (ULTIMO CERTIFICADO)",
    "CANTIDAD DE DIAS (ULTIMO CERTIFICADO)",
    "HASTA",
    "FINALIZACION",
    "DIVISION",
    "OBSERVACION",
];

const CERTIFICADOS_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "Nombre y Apellido",
    "CREDENCIAL",
    "SELECCIONA EL TIPO DE TRÁMITE",
    "CANTIDAD DE DIAS DE REPOSO",
    "INGRESA EL CERTIFICADO",
    "DIAGNOSTICO",
    "NOMBRE Y APELLIDO DEL MÉDICO",
    "ESPECIALIDAD DEL MÉDICO",
    "MATRÍCULA DEL MÉDICO",
    "N° de TELÉFONO DE CONTACTO",
    "PARENTESCO CON EL FAMILIAR",
    "NOMBRES Y APELLIDOS DEL FAMILIAR",
    "FECHA DE NACIMIENTO",
    "FECHA DE CASAMIENTO (solo para el personal casado)",
];

/// The intake sheet shows everything except the case file number.
const CERTIFICADOS_VIEW_COLUMNS: &[&str] = &[
    "GRADO",
    "Nombre y Apellido",
    "CREDENCIAL",
    "SELECCIONA EL TIPO DE TRÁMITE",
    "CANTIDAD DE DIAS DE REPOSO",
    "INGRESA EL CERTIFICADO",
    "DIAGNOSTICO",
    "NOMBRE Y APELLIDO DEL MÉDICO",
    "ESPECIALIDAD DEL MÉDICO",
    "MATRÍCULA DEL MÉDICO",
    "N° de TELÉFONO DE CONTACTO",
    "PARENTESCO CON EL FAMILIAR",
    "NOMBRES Y APELLIDOS DEL FAMILIAR",
    "FECHA DE NACIMIENTO",
    "FECHA DE CASAMIENTO (solo para el personal casado)",
];

const COMISION_MEDICA_COLUMNS: &[&str] = &[
    "NOTA DE D.RR.HH.",
    "FECHA DE NOTA D.RR.HH.",
    "TEXTO NOTIFICABLE DE LA NOTA",
    "CRED.",
    "EXPEDIENTE",
    "RELACIONADO A . . .",
    "FECHA DE EVALUACION VIRTUAL",
    "FECHA DE EVALUACION PRESENCIAL",
    "FECHA DE REINTEGRO",
    "1° FECHA DE EVALUACION VIRTUAL",
    "2° FECHA DE EVALUACIÓN PRESENCIAL",
    "GRADO",
    "APELLIDO Y NOMBRE",
];

const IMPUNTUALIDADES_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "FECHA",
    "HORA DE DEBIA INGRESAR",
    "HORA QUE INGRESO",
    "AÑO",
    "N° DE IMPUNTUALIDAD",
];

const COMPLEMENTO_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "TIPO",
];

const OFICIOS_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "PICU_OFICIO",
    "FECHA del OFICIO",
];

const NOTAS_DAI_COLUMNS: &[&str] = &[
    "NOTA DAI",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "PICU_NOTA_DAI",
    "FECHA de NOTA DAI",
];

const INASISTENCIAS_COLUMNS: &[&str] = &[
    "EXPEDIENTE",
    "GRADO",
    "NOMBRES Y APELLIDOS",
    "CRED.",
    "FECHA DE LA FALTA",
    "MOTIVO",
];

const MESA_ENTRADA_COLUMNS: &[&str] = &[
    "Número Expediente",
    "Código Trámite",
    "Descripción del Trámite",
    "Motivo",
];
