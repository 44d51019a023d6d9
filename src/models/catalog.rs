//! Course catalog: the read-only input of every run.
//!
//! [`CatalogData`] mirrors the wire schema handed over by the loading
//! collaborator (`semester_2`, `semester_4`, `semester_6`, `ruang_kuliah`,
//! `kelas_pagi`, `kelas_malam`). [`Catalog::new`] validates it once; the
//! resulting [`Catalog`] is immutable and can be shared across runs.

use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::entry::Semester;
use crate::error::{Result, ValidationError, ValidationErrorKind};

/// A course offered in one semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique course code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Credit-hour weight (always positive).
    pub credits: u32,
    /// Eligible instructors (at least one).
    pub instructors: Vec<String>,
}

impl Course {
    pub fn new<I, S>(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
        instructors: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            instructors: instructors.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `instructor` may teach this course.
    pub fn is_eligible(&self, instructor: &str) -> bool {
        self.instructors.iter().any(|i| i == instructor)
    }
}

/// One course record as it arrives from storage.
///
/// Missing fields deserialize to empty values and are rejected by
/// [`Catalog::new`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CourseRecord {
    #[cfg_attr(feature = "serde", serde(rename = "kode", default))]
    pub code: String,
    #[cfg_attr(feature = "serde", serde(rename = "nama", default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "sks", default))]
    pub credits: i64,
    #[cfg_attr(feature = "serde", serde(rename = "dosen", default))]
    pub instructors: Vec<String>,
}

impl CourseRecord {
    pub fn new<I, S>(code: &str, name: &str, credits: i64, instructors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: code.to_owned(),
            name: name.to_owned(),
            credits,
            instructors: instructors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Unvalidated catalog in the storage layout.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub semester_2: Option<Vec<CourseRecord>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub semester_4: Option<Vec<CourseRecord>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub semester_6: Option<Vec<CourseRecord>>,
    #[cfg_attr(feature = "serde", serde(rename = "ruang_kuliah", default))]
    pub rooms: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "kelas_pagi", default))]
    pub morning_classes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "kelas_malam", default))]
    pub evening_classes: Vec<String>,
}

impl CatalogData {
    fn bucket(&self, semester: Semester) -> Option<&Vec<CourseRecord>> {
        match semester {
            Semester::Second => self.semester_2.as_ref(),
            Semester::Fourth => self.semester_4.as_ref(),
            Semester::Sixth => self.semester_6.as_ref(),
        }
    }

    /// The faculty's reference catalog: 24 courses over three semesters,
    /// 15 rooms, 9 morning class labels and one evening label.
    pub fn reference() -> Self {
        let sem2 = vec![
            CourseRecord::new("21EM222005", "Statistik Ekonomi", 3, ["Lecturer 01", "Lecturer 02"]),
            CourseRecord::new("21EM222006", "Mikro Ekonomi", 3, ["Lecturer 03", "Lecturer 04"]),
            CourseRecord::new("21EM222007", "Ekonomi Islam", 2, ["Lecturer 05", "Lecturer 06"]),
            CourseRecord::new(
                "21EM222008",
                "Manajemen Koperasi",
                3,
                ["Lecturer 07", "Lecturer 08", "Lecturer 09", "Lecturer 10"],
            ),
            CourseRecord::new(
                "21EM222009",
                "Etika Bisnis",
                2,
                ["Lecturer 11", "Lecturer 12", "Lecturer 13"],
            ),
            CourseRecord::new("21EM222010", "Hukum Bisnis", 2, ["Lecturer 14", "Lecturer 15"]),
            CourseRecord::new(
                "21UM211006",
                "AIK 2 (Ibadah, Muamalah & Akhlak)",
                2,
                ["Lecturer 16", "Lecturer 17"],
            ),
            CourseRecord::new("21UM211009", "Pendidikan Kewarganegaraan", 2, ["Lecturer 18"]),
            CourseRecord::new(
                "21UM211008",
                "English for Specific Purposes (ESP)",
                2,
                ["Lecturer 19", "Lecturer 20"],
            ),
        ];
        let sem4 = vec![
            CourseRecord::new(
                "21EM422018",
                "Ekonomi dan Bisnis Global",
                3,
                ["Lecturer 07", "Lecturer 21", "Lecturer 22"],
            ),
            CourseRecord::new(
                "21EM422019",
                "Manajemen Keuangan Lanjutan",
                3,
                ["Lecturer 23", "Lecturer 06", "Lecturer 24"],
            ),
            CourseRecord::new(
                "21EM422020",
                "Manajemen Sumber Daya Manusia Lanjutan",
                3,
                ["Lecturer 25", "Lecturer 26", "Lecturer 08"],
            ),
            CourseRecord::new(
                "21EM422021",
                "Manajemen Pemasaran Lanjutan",
                3,
                ["Lecturer 12", "Lecturer 27"],
            ),
            CourseRecord::new(
                "21EM422022",
                "Kewirausahaan: Praktek",
                2,
                ["Lecturer 03", "Lecturer 28", "Lecturer 05"],
            ),
            CourseRecord::new("21EM422023", "Aplikasi Komputer", 2, ["Lecturer 29", "Lecturer 30"]),
            CourseRecord::new(
                "21EM422024",
                "Ekonomi Manajerial",
                3,
                ["Lecturer 31", "Lecturer 32"],
            ),
            CourseRecord::new(
                "21UM411011",
                "AIK 4 (Islam dan Ilmu Pengetahuan)",
                2,
                ["Lecturer 33", "Lecturer 34"],
            ),
        ];
        let sem6 = vec![
            CourseRecord::new("21EM623133", "Manajemen Keuangan Internasional", 4, ["Lecturer 35"]),
            CourseRecord::new(
                "21EM623234",
                "Manajemen Pemasaran Internasional",
                3,
                ["Lecturer 36"],
            ),
            CourseRecord::new(
                "21EM623335",
                "Manajemen Sumber Daya Manusia Internasional",
                3,
                ["Lecturer 25"],
            ),
            CourseRecord::new(
                "21EM622036",
                "Sistem Informasi Manajemen",
                3,
                ["Lecturer 31", "Lecturer 28", "Lecturer 30", "Lecturer 37"],
            ),
            CourseRecord::new("21EM622037", "Manajemen Operasional", 3, ["Lecturer 38"]),
            CourseRecord::new(
                "21EM622038",
                "Penganggaran Perusahaan",
                3,
                ["Lecturer 23", "Lecturer 39", "Lecturer 40"],
            ),
            CourseRecord::new("21EM622039", "Metode Penelitian", 3, ["Lecturer 35", "Lecturer 36"]),
        ];
        let strings = |xs: &[&str]| xs.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();

        Self {
            semester_2: Some(sem2),
            semester_4: Some(sem4),
            semester_6: Some(sem6),
            rooms: strings(&[
                "301", "305", "306", "307", "314", "C204", "C302", "C407", "C507", "C604", "C701",
                "C801", "C504", "C606", "C702",
            ]),
            morning_classes: strings(&["1", "4", "6", "9", "11", "12", "13", "14", "15"]),
            evening_classes: strings(&["2"]),
        }
    }
}

/// A validated, immutable course catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    buckets: [Vec<Arc<Course>>; 3],
    rooms: Vec<String>,
    morning_classes: Vec<String>,
    evening_classes: Vec<String>,
}

impl Catalog {
    /// Validates `data` and builds the catalog.
    ///
    /// # Errors
    /// [`TimetableError::Validation`](crate::TimetableError::Validation) if a
    /// semester bucket is missing, a course has an empty code or name, a
    /// non-positive credit weight, no (or a blank) instructor, a course code
    /// repeats, or the room pool is empty.
    pub fn new(data: CatalogData) -> Result<Self> {
        validate(&data)?;
        Ok(Self::from_validated(data))
    }

    /// The reference catalog; see [`CatalogData::reference`].
    pub fn reference() -> Self {
        Self::from_validated(CatalogData::reference())
    }

    fn from_validated(data: CatalogData) -> Self {
        let build = |records: Option<Vec<CourseRecord>>| -> Vec<Arc<Course>> {
            records
                .unwrap_or_default()
                .into_iter()
                .map(|r| {
                    Arc::new(Course {
                        code: r.code,
                        name: r.name,
                        credits: r.credits as u32,
                        instructors: r.instructors,
                    })
                })
                .collect()
        };
        Self {
            buckets: [
                build(data.semester_2),
                build(data.semester_4),
                build(data.semester_6),
            ],
            rooms: data.rooms,
            morning_classes: data.morning_classes,
            evening_classes: data.evening_classes,
        }
    }

    /// Courses of one semester, in catalog order.
    pub fn courses_in(&self, semester: Semester) -> &[Arc<Course>] {
        &self.buckets[bucket_index(semester)]
    }

    /// All courses in traversal order: semester 2, then 4, then 6.
    ///
    /// Position `i` of every solution corresponds to the `i`-th item.
    pub fn courses(&self) -> impl Iterator<Item = (Semester, &Arc<Course>)> + '_ {
        Semester::ALL
            .into_iter()
            .flat_map(move |s| self.courses_in(s).iter().map(move |c| (s, c)))
    }

    /// Total number of courses across all semesters.
    pub fn course_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    pub fn morning_classes(&self) -> &[String] {
        &self.morning_classes
    }

    pub fn evening_classes(&self) -> &[String] {
        &self.evening_classes
    }

    /// Class labels available to a semester. Semester 6 is not subdivided.
    pub fn class_labels(&self, semester: Semester) -> &[String] {
        if semester.has_class_labels() {
            &self.morning_classes
        } else {
            &[]
        }
    }
}

fn bucket_index(semester: Semester) -> usize {
    match semester {
        Semester::Second => 0,
        Semester::Fourth => 1,
        Semester::Sixth => 2,
    }
}

fn validate(data: &CatalogData) -> std::result::Result<(), ValidationError> {
    let mut codes = HashSet::new();

    for semester in Semester::ALL {
        let Some(records) = data.bucket(semester) else {
            return Err(ValidationError::new(
                ValidationErrorKind::MissingSemester,
                format!("no data for semester_{}", semester.number()),
            ));
        };

        for record in records {
            if record.code.trim().is_empty() || record.name.trim().is_empty() {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    format!(
                        "malformed course record in semester_{}: {record:?}",
                        semester.number()
                    ),
                ));
            }
            if record.credits <= 0 || record.credits > i64::from(u32::MAX) {
                return Err(ValidationError::new(
                    ValidationErrorKind::InvalidCredits,
                    format!("invalid credit weight {} for {}", record.credits, record.name),
                ));
            }
            if record.instructors.is_empty()
                || record.instructors.iter().any(|i| i.trim().is_empty())
            {
                return Err(ValidationError::new(
                    ValidationErrorKind::NoInstructors,
                    format!("{} needs at least one named instructor", record.name),
                ));
            }
            if !codes.insert(record.code.as_str()) {
                return Err(ValidationError::new(
                    ValidationErrorKind::DuplicateCourse,
                    format!("course code {} appears more than once", record.code),
                ));
            }
        }
    }

    if data.rooms.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::NoRooms,
            "room pool is empty",
        ));
    }

    Ok(())
}
