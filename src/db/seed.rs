//! Demo catalogue inserted into an empty database at startup.

use crate::db::models::{Article, Doctor, Facility, FacilityCategory, Testimonial};
use crate::db::sqlite::Storage;
use crate::error::MedicareError;
use chrono::{Duration, NaiveDate, Utc};
use tracing::info;

/// Counts of rows written by [`Storage::seed_demo_data`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub doctors: usize,
    pub articles: usize,
    pub facilities: usize,
    pub testimonials: usize,
}

impl Storage {
    /// Insert the demo catalogue in one transaction. Does nothing when any
    /// doctor already exists; returns `None` in that case.
    pub async fn seed_demo_data(&self) -> Result<Option<SeedReport>, MedicareError> {
        if self.count_doctors().await? > 0 {
            info!("database already populated; skipping demo seed");
            return Ok(None);
        }

        let doctors = demo_doctors();
        let articles = demo_articles();
        let facilities = demo_facilities();
        let testimonials = demo_testimonials();

        let mut tx = self.pool().begin().await?;
        for doctor in &doctors {
            Storage::insert_doctor(&mut *tx, doctor).await?;
        }
        for article in &articles {
            Storage::insert_article(&mut *tx, article).await?;
        }
        for facility in &facilities {
            Storage::insert_facility(&mut *tx, facility).await?;
        }
        for testimonial in &testimonials {
            Storage::insert_testimonial(&mut *tx, testimonial).await?;
        }
        tx.commit().await?;

        let report = SeedReport {
            doctors: doctors.len(),
            articles: articles.len(),
            facilities: facilities.len(),
            testimonials: testimonials.len(),
        };
        info!(
            doctors = report.doctors,
            articles = report.articles,
            facilities = report.facilities,
            testimonials = report.testimonials,
            "seeded demo catalogue"
        );
        Ok(Some(report))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    name: &str,
    specialty: &str,
    experience: &str,
    education: &[&str],
    certifications: &[&str],
    languages: &[&str],
    rating: f64,
    review_count: i64,
    price: &str,
    bio: &str,
    consultation_types: &[&str],
) -> Doctor {
    Doctor {
        id: 0,
        name: name.to_string(),
        specialty: specialty.to_string(),
        experience: experience.to_string(),
        education: strings(education),
        certifications: strings(certifications),
        languages: strings(languages),
        rating,
        review_count,
        price: price.to_string(),
        bio: bio.to_string(),
        profile_image: None,
        schedule: None,
        consultation_types: strings(consultation_types),
        is_available: true,
        created_at: Utc::now(),
    }
}

pub fn demo_doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "Dr. Ahmad Wijaya, Sp.JP",
            "Jantung dan Pembuluh Darah",
            "15 tahun",
            &["S1 Kedokteran Universitas Indonesia", "Spesialis Jantung RS Harapan Kita"],
            &["Sertifikat Kardiologi", "Fellow American College of Cardiology"],
            &["Indonesia", "English"],
            4.8,
            125,
            "Rp 750.000",
            "Dokter spesialis jantung dengan pengalaman 15 tahun dalam menangani berbagai penyakit kardiovaskular.",
            &["offline", "online"],
        ),
        doctor(
            "Dr. Siti Nurhaliza, Sp.A",
            "Anak",
            "12 tahun",
            &["S1 Kedokteran Universitas Gadjah Mada", "Spesialis Anak RSCM"],
            &["Sertifikat Pediatri", "PALS Certification"],
            &["Indonesia", "English"],
            4.9,
            98,
            "Rp 650.000",
            "Dokter spesialis anak yang berpengalaman menangani kesehatan bayi, anak, dan remaja.",
            &["offline", "online", "emergency"],
        ),
        doctor(
            "Dr. Budi Hartono, Sp.PD",
            "Penyakit Dalam",
            "18 tahun",
            &["S1 Kedokteran Universitas Padjadjaran", "Spesialis Penyakit Dalam RS Cipto Mangunkusumo"],
            &["Sertifikat Penyakit Dalam", "Diabetes Educator"],
            &["Indonesia", "English", "Mandarin"],
            4.7,
            156,
            "Rp 700.000",
            "Dokter spesialis penyakit dalam dengan keahlian khusus dalam penanganan diabetes dan hipertensi.",
            &["offline", "online"],
        ),
        doctor(
            "Dr. Maya Sari, Sp.OG",
            "Obstetri & Ginekologi",
            "14 tahun",
            &["S1 Kedokteran Universitas Airlangga", "Spesialis Obstetri Ginekologi RSUD Dr. Soetomo"],
            &["Sertifikat Obstetri Ginekologi", "Minimal Invasive Surgery"],
            &["Indonesia", "English"],
            4.9,
            203,
            "Rp 800.000",
            "Dokter spesialis kandungan dengan keahlian dalam pelayanan kehamilan, persalinan, dan kesehatan wanita.",
            &["offline", "emergency"],
        ),
        doctor(
            "Dr. Indra Kusuma, Sp.M",
            "Mata",
            "10 tahun",
            &["S1 Kedokteran Universitas Diponegoro", "Spesialis Mata RS Mata Cicendo"],
            &["Sertifikat Oftalmologi", "Retina Specialist"],
            &["Indonesia", "English"],
            4.6,
            87,
            "Rp 600.000",
            "Dokter spesialis mata dengan keahlian dalam bedah refraktif dan penanganan penyakit retina.",
            &["offline", "online"],
        ),
    ]
}

fn testimonial(patient: &str, treatment: &str, text: &str, rating: i64, date: (i32, u32, u32)) -> Testimonial {
    Testimonial {
        id: 0,
        patient_name: patient.to_string(),
        treatment: treatment.to_string(),
        testimonial: text.to_string(),
        rating,
        treatment_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        patient_image: None,
        is_featured: true,
        is_published: true,
    }
}

pub fn demo_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "Ibu Sari Wijaya",
            "Pemeriksaan Jantung",
            "Pelayanan sangat memuaskan. Dr. Ahmad sangat profesional dan ramah. Fasilitas rumah sakitnya juga sangat bagus dan modern.",
            5,
            (2024, 1, 15),
        ),
        testimonial(
            "Bapak Andi Pratama",
            "Konsultasi Anak",
            "Dr. Siti sangat sabar menangani anak saya. Penjelasannya jelas dan mudah dipahami. Highly recommended!",
            5,
            (2024, 1, 20),
        ),
        testimonial(
            "Ibu Maria Gonzales",
            "Kontrol Diabetes",
            "Sudah 2 tahun kontrol dengan Dr. Budi. Diabetes saya terkontrol dengan baik berkat saran dan pengobatan yang tepat.",
            5,
            (2024, 1, 25),
        ),
        testimonial(
            "Ibu Fitri Handayani",
            "Program Kehamilan",
            "Dr. Maya sangat perhatian dan memberikan pelayanan terbaik selama kehamilan saya. Alhamdulillah persalinan lancar.",
            5,
            (2024, 2, 1),
        ),
        testimonial(
            "Bapak Joko Susilo",
            "Operasi Katarak",
            "Operasi katarak dengan Dr. Indra sangat sukses. Sekarang penglihatan saya sudah kembali normal. Terima kasih!",
            5,
            (2024, 2, 10),
        ),
        testimonial(
            "Ibu Dewi Lestari",
            "Medical Check Up",
            "Medical check up lengkap dengan hasil yang detail. Staff rumah sakit sangat ramah dan profesional.",
            4,
            (2024, 2, 15),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn article(
    age_days: i64,
    title: &str,
    excerpt: &str,
    content: &str,
    author: &str,
    category: &str,
    read_time: &str,
    views: i64,
    likes: i64,
    featured: bool,
) -> Article {
    Article {
        id: 0,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        read_time: read_time.to_string(),
        views,
        likes,
        image: None,
        featured,
        published: true,
        created_at: Utc::now() - Duration::days(age_days),
    }
}

pub fn demo_articles() -> Vec<Article> {
    vec![
        article(
            4,
            "10 Tips Menjaga Kesehatan Jantung",
            "Jantung adalah organ vital yang perlu dijaga kesehatannya. Berikut tips mudah untuk menjaga kesehatan jantung Anda.",
            "Kesehatan jantung sangat penting untuk dijaga. Berikut adalah 10 tips mudah yang bisa Anda lakukan setiap hari...",
            "Dr. Ahmad Wijaya, Sp.JP",
            "Kardiologi",
            "5 menit",
            1250,
            89,
            true,
        ),
        article(
            3,
            "Pentingnya Imunisasi untuk Anak",
            "Imunisasi adalah cara terbaik melindungi anak dari berbagai penyakit berbahaya. Ketahui jadwal imunisasi yang tepat.",
            "Imunisasi merupakan investasi terbaik untuk kesehatan anak di masa depan...",
            "Dr. Siti Nurhaliza, Sp.A",
            "Pediatri",
            "7 menit",
            890,
            67,
            true,
        ),
        article(
            2,
            "Mengelola Diabetes dengan Baik",
            "Diabetes bukan akhir dari segalanya. Dengan pengelolaan yang tepat, penderita diabetes bisa hidup normal dan sehat.",
            "Diabetes mellitus adalah penyakit kronis yang memerlukan pengelolaan seumur hidup...",
            "Dr. Budi Hartono, Sp.PD",
            "Penyakit Dalam",
            "8 menit",
            1456,
            102,
            false,
        ),
        article(
            1,
            "Persiapan Kehamilan yang Sehat",
            "Persiapan kehamilan yang baik sangat penting untuk kesehatan ibu dan janin. Pelajari langkah-langkah persiapan kehamilan.",
            "Persiapan kehamilan dimulai jauh sebelum pembuahan terjadi...",
            "Dr. Maya Sari, Sp.OG",
            "Obstetri & Ginekologi",
            "6 menit",
            723,
            54,
            false,
        ),
        article(
            0,
            "Cara Menjaga Kesehatan Mata di Era Digital",
            "Penggunaan gadget yang berlebihan dapat mengganggu kesehatan mata. Berikut cara melindungi mata Anda.",
            "Di era digital ini, mata kita sering terpapar layar gadget dalam waktu lama...",
            "Dr. Indra Kusuma, Sp.M",
            "Oftalmologi",
            "4 menit",
            965,
            78,
            true,
        ),
    ]
}

fn facility(name: &str, description: &str, category: FacilityCategory, features: &[&str], order: i64) -> Facility {
    Facility {
        id: 0,
        name: name.to_string(),
        description: description.to_string(),
        category,
        features: strings(features),
        images: None,
        capacity: None,
        location: None,
        staff: None,
        certification: None,
        types: None,
        coverage: None,
        benefits: None,
        is_active: true,
        order,
    }
}

fn staffed(mut f: Facility, capacity: &str, location: &str, staff: &str, certification: &str) -> Facility {
    f.capacity = Some(capacity.to_string());
    f.location = Some(location.to_string());
    f.staff = Some(staff.to_string());
    f.certification = Some(certification.to_string());
    f
}

pub fn demo_facilities() -> Vec<Facility> {
    let mut his = facility(
        "Hospital Information System (HIS)",
        "Sistem informasi rumah sakit terintegrasi",
        FacilityCategory::Technology,
        &["Electronic medical record", "Digital prescription", "Lab integration", "Billing system"],
        5,
    );
    his.coverage = Some("100% digital".to_string());
    his.benefits = Some(strings(&["Paperless", "Real-time data", "Patient safety", "Efficiency"]));

    vec![
        staffed(
            facility(
                "Unit Gawat Darurat (UGD)",
                "Layanan gawat darurat 24 jam dengan tim medis siap siaga",
                FacilityCategory::Medical,
                &["24 jam operasional", "Trauma center", "Ambulance siaga", "Resusitasi unit"],
                1,
            ),
            "50 bed",
            "Lantai 1",
            "30 petugas medis",
            "Emergency Medicine Certified",
        ),
        staffed(
            facility(
                "Intensive Care Unit (ICU)",
                "Perawatan intensif dengan monitoring ketat",
                FacilityCategory::Medical,
                &["Ventilator canggih", "Central monitoring", "Isolasi HEPA", "24 jam specialist"],
                2,
            ),
            "20 bed",
            "Lantai 3",
            "15 intensivist",
            "ICU Accredited",
        ),
        staffed(
            facility(
                "Laboratorium Patologi Klinik",
                "Pemeriksaan laboratorium lengkap 24 jam",
                FacilityCategory::Support,
                &["Automated analyzer", "Point of care testing", "Rapid test", "Molecular diagnostic"],
                3,
            ),
            "5000 sampel/hari",
            "Lantai 2",
            "20 lab technologist",
            "ISO 15189",
        ),
        staffed(
            facility(
                "Radiologi & Imaging",
                "Pemeriksaan radiologi dengan teknologi digital",
                FacilityCategory::Support,
                &["Digital radiography", "Computed radiography", "PACS system", "Teleradiology"],
                4,
            ),
            "300 pemeriksaan/hari",
            "Lantai 1",
            "8 radiologist",
            "ACR Accredited",
        ),
        his,
    ]
}
