//! Built-in World Manufacturer Identifier table.

/// `(WMI, manufacturer)` pairs, sorted by code.
pub(super) static WMI_ENTRIES: &[(&str, &str)] = &[
    ("1B3", "Dodge"),
    ("1B4", "Chrysler"),
    ("1B6", "Dodge"),
    ("1B7", "Dodge"),
    ("1C3", "Chrysler"),
    ("1C4", "Chrysler"),
    ("1C6", "Chrysler"),
    ("1C8", "Chrysler"),
    ("1D3", "Dodge"),
    ("1D4", "Dodge"),
    ("1D5", "Dodge"),
    ("1D6", "Dodge"),
    ("1D7", "Dodge"),
    ("1D8", "Dodge"),
    ("1F1", "Ford"),
    ("1F2", "Ford"),
    ("1F3", "Ford"),
    ("1F4", "Ford"),
    ("1F5", "Ford"),
    ("1F6", "Ford"),
    ("1F7", "Ford"),
    ("1F8", "Ford"),
    ("1F9", "Ford"),
    ("1FA", "Ford"),
    ("1FB", "Ford"),
    ("1FC", "Ford"),
    ("1FD", "Ford"),
    ("1FM", "Ford"),
    ("1FT", "Ford"),
    ("1FU", "Ford"),
    ("1FV", "Ford"),
    ("1G1", "Chevrolet"),
    ("1G2", "Pontiac"),
    ("1G3", "Oldsmobile"),
    ("1G4", "Buick"),
    ("1G5", "GMC"),
    ("1G6", "Cadillac"),
    ("1G8", "Saturn"),
    ("1G9", "Geo"),
    ("1GB", "Chevrolet"),
    ("1GC", "Chevrolet"),
    ("1GD", "Chevrolet"),
    ("1GE", "Cadillac"),
    ("1GG", "Chevrolet"),
    ("1GJ", "GMC"),
    ("1GK", "GMC"),
    ("1GM", "Pontiac"),
    ("1GN", "Chevrolet"),
    ("1GT", "GMC"),
    ("1GY", "Cadillac"),
    ("1H4", "Honda"),
    ("1HF", "Honda"),
    ("1HG", "Honda"),
    ("1HH", "Honda"),
    ("1J4", "Jeep"),
    ("1J7", "Jeep"),
    ("1J8", "Jeep"),
    ("1L1", "Lincoln"),
    ("1L5", "Lincoln"),
    ("1LN", "Lincoln"),
    ("1M1", "Mercury"),
    ("1M2", "Mercury"),
    ("1M3", "Mercury"),
    ("1M4", "Mercury"),
    ("1M8", "Mercury"),
    ("1ME", "Mercury"),
    ("1MR", "Mercury"),
    ("1N4", "Nissan"),
    ("1N6", "Nissan"),
    ("1N8", "Nissan"),
    ("1N9", "Nissan"),
    ("1NP", "Nissan"),
    ("1NX", "Infiniti"),
    ("1P3", "Plymouth"),
    ("1P4", "Plymouth"),
    ("1P5", "Plymouth"),
    ("1P6", "Plymouth"),
    ("1P7", "Plymouth"),
    ("1P8", "Plymouth"),
    ("1P9", "Plymouth"),
    ("1V1", "Volkswagen"),
    ("1V2", "Volkswagen"),
    ("1VW", "Volkswagen"),
    ("1Y1", "Mazda"),
    ("1YV", "Mazda"),
    ("1ZV", "Ford"),
    ("2A3", "Chrysler"),
    ("2A4", "Chrysler"),
    ("2A5", "Chrysler"),
    ("2A8", "Chrysler"),
    ("2B1", "Dodge"),
    ("2B3", "Dodge"),
    ("2B4", "Dodge"),
    ("2B5", "Dodge"),
    ("2B6", "Dodge"),
    ("2B7", "Dodge"),
    ("2B8", "Dodge"),
    ("2C3", "Chrysler"),
    ("2C4", "Chrysler"),
    ("2C5", "Chrysler"),
    ("2C6", "Chrysler"),
    ("2C7", "Chrysler"),
    ("2C8", "Chrysler"),
    ("2CK", "Chrysler"),
    ("2CM", "Chrysler"),
    ("2CN", "Chrysler"),
    ("2CP", "Chrysler"),
    ("2CZ", "Chrysler"),
    ("2D3", "Dodge"),
    ("2D4", "Dodge"),
    ("2D5", "Dodge"),
    ("2D6", "Dodge"),
    ("2D7", "Dodge"),
    ("2D8", "Dodge"),
    ("2E3", "Eagle"),
    ("2FA", "Ford"),
    ("2FB", "Ford"),
    ("2FC", "Ford"),
    ("2FD", "Ford"),
    ("2FM", "Ford"),
    ("2FT", "Ford"),
    ("2FU", "Ford"),
    ("2FV", "Ford"),
    ("2FW", "Ford"),
    ("2FZ", "Ford"),
    ("2G0", "GMC"),
    ("2G1", "Chevrolet"),
    ("2G2", "Pontiac"),
    ("2G3", "Oldsmobile"),
    ("2G4", "Buick"),
    ("2G5", "GMC"),
    ("2G6", "Cadillac"),
    ("2G7", "Pontiac"),
    ("2G8", "Chevrolet"),
    ("2G9", "Geo"),
    ("2GK", "GMC"),
    ("2GN", "Chevrolet"),
    ("2GT", "GMC"),
    ("2HG", "Honda"),
    ("2HJ", "Honda"),
    ("2HK", "Honda"),
    ("2HM", "Hyundai"),
    ("2HN", "Acura"),
    ("2J4", "Jeep"),
    ("2L3", "Lincoln"),
    ("2LM", "Lincoln"),
    ("2M1", "Mercury"),
    ("2M2", "Mercury"),
    ("2M3", "Mercury"),
    ("2M4", "Mercury"),
    ("2M5", "Mercury"),
    ("2M6", "Mercury"),
    ("2ME", "Mercury"),
    ("2NV", "Nissan"),
    ("2P3", "Plymouth"),
    ("2P4", "Plymouth"),
    ("2P5", "Plymouth"),
    ("2P6", "Plymouth"),
    ("2P7", "Plymouth"),
    ("2P8", "Plymouth"),
    ("2P9", "Plymouth"),
    ("2T1", "Toyota"),
    ("2T2", "Toyota"),
    ("2T3", "Toyota"),
    ("2WK", "Freightliner"),
    ("2WL", "Sterling"),
    ("3AB", "Audi"),
    ("3C4", "Chrysler"),
    ("3C6", "Chrysler"),
    ("3D3", "Dodge"),
    ("3D4", "Dodge"),
    ("3D5", "Dodge"),
    ("3D6", "Dodge"),
    ("3D7", "Dodge"),
    ("3FA", "Ford"),
    ("3FB", "Ford"),
    ("3FC", "Ford"),
    ("3FD", "Ford"),
    ("3FE", "Ford"),
    ("3FR", "Ford"),
    ("3FT", "Ford"),
    ("3G1", "Chevrolet"),
    ("3G2", "Pontiac"),
    ("3G3", "Oldsmobile"),
    ("3G4", "Buick"),
    ("3G5", "Buick"),
    ("3G6", "Cadillac"),
    ("3G7", "GMC"),
    ("3G8", "Chevrolet"),
    ("3GC", "Chevrolet"),
    ("3GD", "GMC"),
    ("3GE", "Chevrolet"),
    ("3GK", "GMC"),
    ("3GM", "Pontiac"),
    ("3GN", "Chevrolet"),
    ("3GT", "GMC"),
    ("3GY", "Cadillac"),
    ("3HG", "Honda"),
    ("3HM", "Honda"),
    ("3KP", "Kia"),
    ("3LN", "Lincoln"),
    ("3MD", "Mazda"),
    ("3ME", "Mercury"),
    ("3MY", "Mazda"),
    ("3N1", "Nissan"),
    ("3N6", "Nissan"),
    ("3N8", "Nissan"),
    ("3NV", "Nissan"),
    ("3P3", "Plymouth"),
    ("3TM", "Toyota"),
    ("3TY", "Toyota"),
    ("3VV", "Volkswagen"),
    ("3VW", "Volkswagen"),
    ("4A3", "Mitsubishi"),
    ("4A4", "Mitsubishi"),
    ("4A5", "Mitsubishi"),
    ("4B3", "Mitsubishi"),
    ("4F2", "Mazda"),
    ("4F3", "Mazda"),
    ("4F4", "Mazda"),
    ("4J4", "Jeep"),
    ("4J8", "Jeep"),
    ("4JG", "Mercedes-Benz"),
    ("4JP", "Mercedes-Benz"),
    ("4M2", "Mercury"),
    ("4S1", "Isuzu"),
    ("4S2", "Isuzu"),
    ("4S3", "Subaru"),
    ("4S4", "Subaru"),
    ("4S6", "Honda"),
    ("4S7", "Honda"),
    ("4T1", "Toyota"),
    ("4T2", "Toyota"),
    ("4T3", "Toyota"),
    ("4T4", "Toyota"),
    ("4TA", "Toyota"),
    ("4TB", "Toyota"),
    ("4TC", "Toyota"),
    ("4TD", "Toyota"),
    ("4TE", "Toyota"),
    ("4TF", "Toyota"),
    ("4US", "BMW"),
    ("4UZ", "BMW"),
    ("4V1", "Volvo"),
    ("4V2", "Volvo"),
    ("4V3", "Volvo"),
    ("4V4", "Volvo"),
    ("4V5", "Volvo"),
    ("4V6", "Volvo"),
    ("4VL", "Volvo"),
    ("4VM", "Volvo"),
    ("5FN", "Honda"),
    ("5FP", "Honda"),
    ("5FR", "Honda"),
    ("5J6", "Honda"),
    ("5J8", "Acura"),
    ("5KJ", "Kia"),
    ("5KK", "Kia"),
    ("5KM", "Kia"),
    ("5L1", "Lincoln"),
    ("5L3", "Lincoln"),
    ("5L4", "Lincoln"),
    ("5LM", "Lincoln"),
    ("5LT", "Lincoln"),
    ("5N1", "Nissan"),
    ("5N3", "Infiniti"),
    ("5NM", "Hyundai"),
    ("5NP", "Hyundai"),
    ("5T2", "Toyota"),
    ("5TB", "Toyota"),
    ("5TC", "Toyota"),
    ("5TD", "Toyota"),
    ("5TE", "Toyota"),
    ("5TF", "Toyota"),
    ("5TG", "Toyota"),
    ("5TH", "Toyota"),
    ("5TJ", "Toyota"),
    ("5TK", "Toyota"),
    ("5TL", "Toyota"),
    ("5TM", "Toyota"),
    ("5TN", "Toyota"),
    ("5TP", "Toyota"),
    ("5TT", "Toyota"),
    ("5TU", "Toyota"),
    ("5TX", "Lexus"),
    ("5TY", "Toyota"),
    ("5TZ", "Toyota"),
    ("5UM", "BMW"),
    ("5UX", "BMW"),
    ("5X3", "Hyundai"),
    ("5X4", "Hyundai"),
    ("5X5", "Hyundai"),
    ("5X7", "Hyundai"),
    ("5XX", "Kia"),
    ("5XY", "Kia"),
    ("5YF", "Toyota"),
    ("5YH", "Honda"),
    ("5YJ", "Tesla"),
    ("5YM", "Toyota"),
    ("5YP", "Honda"),
    ("5YR", "Honda"),
    ("5YV", "Mazda"),
    ("6AB", "Audi"),
    ("6AC", "Mack"),
    ("6F1", "Ford"),
    ("6F4", "Nissan"),
    ("6F5", "Mitsubishi"),
    ("6FP", "Ford"),
    ("6G1", "Holden"),
    ("6G2", "Pontiac"),
    ("6G3", "Chevrolet"),
    ("6H8", "Holden"),
    ("6MM", "Mitsubishi"),
    ("6MP", "Mitsubishi"),
    ("6MZ", "Mazda"),
    ("6T1", "Toyota"),
    ("6T9", "Trailer"),
    ("6U9", "Privately Built"),
    ("935", "Citroen"),
    ("936", "Peugeot"),
    ("93H", "Honda"),
    ("93R", "Toyota"),
    ("93U", "Audi"),
    ("93V", "Audi"),
    ("93W", "Fiat"),
    ("93X", "Mitsubishi"),
    ("93Y", "Renault"),
    ("94D", "Nissan"),
    ("98M", "BMW"),
    ("98R", "Chery"),
    ("99A", "Audi"),
    ("99J", "Jaguar"),
    ("9BD", "Fiat"),
    ("9BF", "Ford"),
    ("9BG", "Chevrolet"),
    ("9BH", "Hyundai"),
    ("9BM", "Mercedes-Benz"),
    ("9BR", "Toyota"),
    ("9BS", "Scania"),
    ("9BW", "Volkswagen"),
    ("JA3", "Mitsubishi"),
    ("JA4", "Mitsubishi"),
    ("JA7", "Mitsubishi"),
    ("JAA", "Isuzu"),
    ("JAB", "Isuzu"),
    ("JAC", "Isuzu"),
    ("JAE", "Isuzu"),
    ("JAL", "Isuzu"),
    ("JAN", "Isuzu"),
    ("JAS", "Isuzu"),
    ("JC1", "Mazda"),
    ("JD1", "Daihatsu"),
    ("JD2", "Daihatsu"),
    ("JD3", "Daihatsu"),
    ("JD4", "Daihatsu"),
    ("JDA", "Daihatsu"),
    ("JDB", "Daihatsu"),
    ("JDC", "Daihatsu"),
    ("JF1", "Subaru"),
    ("JF2", "Subaru"),
    ("JF3", "Subaru"),
    ("JF4", "Subaru"),
    ("JF5", "Subaru"),
    ("JG1", "Mazda"),
    ("JG7", "Mazda"),
    ("JGC", "Geo"),
    ("JH2", "Honda"),
    ("JH3", "Honda"),
    ("JH4", "Acura"),
    ("JH5", "Honda"),
    ("JHA", "Honda"),
    ("JHB", "Honda"),
    ("JHD", "Honda"),
    ("JHE", "Honda"),
    ("JHF", "Honda"),
    ("JHG", "Honda"),
    ("JHL", "Honda"),
    ("JHM", "Honda"),
    ("JKR", "Kawasaki"),
    ("JKS", "Suzuki"),
    ("JL5", "Mitsubishi"),
    ("JL6", "Mitsubishi"),
    ("JL7", "Mitsubishi"),
    ("JLS", "Sterling"),
    ("JM1", "Mazda"),
    ("JM3", "Mazda"),
    ("JM6", "Mazda"),
    ("JM7", "Mazda"),
    ("JM8", "Mazda"),
    ("JMB", "Mitsubishi"),
    ("JMY", "Mitsubishi"),
    ("JMZ", "Mazda"),
    ("JN1", "Nissan"),
    ("JN3", "Nissan"),
    ("JN4", "Nissan"),
    ("JN6", "Nissan"),
    ("JN8", "Nissan"),
    ("JNA", "Nissan"),
    ("JNB", "Nissan"),
    ("JNC", "Nissan"),
    ("JND", "Nissan"),
    ("JNE", "Nissan"),
    ("JNF", "Nissan"),
    ("JNK", "Infiniti"),
    ("JNR", "Infiniti"),
    ("JNT", "Nissan"),
    ("JNV", "Nissan"),
    ("JNX", "Infiniti"),
    ("JNZ", "Nissan"),
    ("JPT", "Pontiac"),
    ("JS1", "Suzuki"),
    ("JS2", "Suzuki"),
    ("JS3", "Suzuki"),
    ("JS4", "Suzuki"),
    ("JS5", "Suzuki"),
    ("JS6", "Suzuki"),
    ("JS7", "Suzuki"),
    ("JS8", "Suzuki"),
    ("JS9", "Suzuki"),
    ("JSA", "Suzuki"),
    ("JSB", "Suzuki"),
    ("JSC", "Suzuki"),
    ("JSD", "Suzuki"),
    ("JSE", "Suzuki"),
    ("JSG", "Suzuki"),
    ("JSH", "Suzuki"),
    ("JSJ", "Suzuki"),
    ("JSK", "Suzuki"),
    ("JSL", "Suzuki"),
    ("JSZ", "Suzuki"),
    ("JT1", "Toyota"),
    ("JT2", "Toyota"),
    ("JT3", "Toyota"),
    ("JT4", "Toyota"),
    ("JT5", "Toyota"),
    ("JT6", "Toyota"),
    ("JT7", "Toyota"),
    ("JT8", "Lexus"),
    ("JTA", "Toyota"),
    ("JTB", "Toyota"),
    ("JTC", "Toyota"),
    ("JTD", "Toyota"),
    ("JTE", "Toyota"),
    ("JTF", "Toyota"),
    ("JTG", "Toyota"),
    ("JTH", "Lexus"),
    ("JTJ", "Lexus"),
    ("JTK", "Toyota"),
    ("JTL", "Toyota"),
    ("JTM", "Toyota"),
    ("JTN", "Toyota"),
    ("JTR", "Toyota"),
    ("JTS", "Toyota"),
    ("JTT", "Toyota"),
    ("JTU", "Toyota"),
    ("JTV", "Toyota"),
    ("JTW", "Toyota"),
    ("JTX", "Toyota"),
    ("JTY", "Toyota"),
    ("JTZ", "Toyota"),
    ("JVB", "Volvo"),
    ("JYA", "Yamaha"),
    ("JYB", "Yamaha"),
    ("JYC", "Yamaha"),
    ("JYD", "Yamaha"),
    ("JYE", "Yamaha"),
    ("JYF", "Yamaha"),
    ("JYH", "Yamaha"),
    ("JYJ", "Yamaha"),
    ("KL1", "Chevrolet"),
    ("KL2", "Pontiac"),
    ("KL3", "Holden"),
    ("KL4", "Buick"),
    ("KL5", "Chevrolet"),
    ("KL6", "Cadillac"),
    ("KL7", "Chevrolet"),
    ("KL8", "Chevrolet"),
    ("KLA", "Daewoo"),
    ("KLC", "Daewoo"),
    ("KLE", "Daewoo"),
    ("KLF", "Daewoo"),
    ("KLG", "Daewoo"),
    ("KLH", "Daewoo"),
    ("KLJ", "Daewoo"),
    ("KLL", "Daewoo"),
    ("KLM", "Daewoo"),
    ("KLN", "Daewoo"),
    ("KLT", "Daewoo"),
    ("KLU", "Daewoo"),
    ("KLY", "Daewoo"),
    ("KM1", "Hyundai"),
    ("KM2", "Hyundai"),
    ("KM3", "Hyundai"),
    ("KM4", "Hyundai"),
    ("KM5", "Hyundai"),
    ("KM6", "Hyundai"),
    ("KM7", "Hyundai"),
    ("KM8", "Hyundai"),
    ("KM9", "Hyundai"),
    ("KMC", "Hyundai"),
    ("KMD", "Hyundai"),
    ("KME", "Hyundai"),
    ("KMF", "Hyundai"),
    ("KMG", "Hyundai"),
    ("KMH", "Hyundai"),
    ("KMJ", "Hyundai"),
    ("KMK", "Hyundai"),
    ("KML", "Hyundai"),
    ("KMN", "Hyundai"),
    ("KMP", "Hyundai"),
    ("KMR", "Hyundai"),
    ("KMS", "Hyundai"),
    ("KMT", "Hyundai"),
    ("KMU", "Hyundai"),
    ("KMV", "Hyundai"),
    ("KMW", "Hyundai"),
    ("KMX", "Hyundai"),
    ("KMY", "Genesis"),
    ("KMZ", "Hyundai"),
    ("KN1", "Kia"),
    ("KN2", "Kia"),
    ("KN3", "Kia"),
    ("KN4", "Kia"),
    ("KN5", "Kia"),
    ("KN6", "Kia"),
    ("KN7", "Kia"),
    ("KN8", "Kia"),
    ("KN9", "Kia"),
    ("KNA", "Kia"),
    ("KNB", "Kia"),
    ("KNC", "Kia"),
    ("KND", "Kia"),
    ("KNE", "Kia"),
    ("KNF", "Kia"),
    ("KNG", "Kia"),
    ("KNH", "Kia"),
    ("KNJ", "Kia"),
    ("KNK", "Kia"),
    ("KNL", "Kia"),
    ("KNM", "Kia"),
    ("KNN", "Kia"),
    ("KNP", "Kia"),
    ("KNR", "Kia"),
    ("KNT", "Kia"),
    ("KNU", "Kia"),
    ("KPH", "Mitsubishi"),
    ("KPK", "SsangYong"),
    ("KPT", "SsangYong"),
    ("LAG", "GM"),
    ("LAL", "GM"),
    ("LAN", "GM"),
    ("LAR", "GM"),
    ("LB1", "BYD"),
    ("LB2", "Geely"),
    ("LB3", "Geely"),
    ("LB4", "BYD"),
    ("LB5", "Great Wall"),
    ("LB6", "Great Wall"),
    ("LBE", "BMW"),
    ("LBM", "BMW"),
    ("LBV", "BMW"),
    ("LC0", "BYD"),
    ("LC6", "BYD"),
    ("LCA", "Chery"),
    ("LCB", "Chery"),
    ("LCC", "Chery"),
    ("LCD", "Chery"),
    ("LCE", "Chery"),
    ("LCU", "Chrysler"),
    ("LCV", "Chrysler"),
    ("LCX", "Chrysler"),
    ("LDC", "Dongfeng"),
    ("LDD", "Dongfeng"),
    ("LDE", "Dongfeng"),
    ("LDF", "Dongfeng"),
    ("LDG", "Dongfeng"),
    ("LDH", "Dongfeng"),
    ("LDJ", "Dongfeng"),
    ("LDK", "Dongfeng"),
    ("LDL", "Dongfeng"),
    ("LDN", "Nissan"),
    ("LDP", "Nissan"),
    ("LDT", "Nissan"),
    ("LDV", "Nissan"),
    ("LDY", "Zhongtai"),
    ("LE4", "Beijing"),
    ("LEN", "Beijing"),
    ("LF1", "FAW"),
    ("LF3", "FAW"),
    ("LF5", "FAW"),
    ("LF7", "FAW"),
    ("LFA", "FAW"),
    ("LFB", "FAW"),
    ("LFC", "FAW"),
    ("LFD", "FAW"),
    ("LFE", "FAW"),
    ("LFF", "FAW"),
    ("LFG", "FAW"),
    ("LFH", "FAW"),
    ("LFJ", "FAW"),
    ("LFK", "FAW"),
    ("LFL", "FAW"),
    ("LFM", "FAW"),
    ("LFN", "FAW"),
    ("LFP", "FAW"),
    ("LFT", "FAW"),
    ("LFV", "FAW"),
    ("LFW", "FAW"),
    ("LFX", "FAW"),
    ("LFY", "FAW"),
    ("LFZ", "FAW"),
    ("LGA", "Dongfeng"),
    ("LGB", "Nissan"),
    ("LGD", "Dongfeng"),
    ("LGE", "Dongfeng"),
    ("LGF", "Dongfeng"),
    ("LGG", "Dongfeng"),
    ("LGH", "Dongfeng"),
    ("LGJ", "GAC"),
    ("LGK", "GAC"),
    ("LGL", "GAC"),
    ("LGN", "GAC"),
    ("LGP", "GAC"),
    ("LGR", "GAC"),
    ("LGS", "GAC"),
    ("LGT", "GAC"),
    ("LGU", "GAC"),
    ("LGW", "Great Wall"),
    ("LGX", "BYD"),
    ("LGY", "GAC"),
    ("LGZ", "GAC"),
    ("LH1", "FAW"),
    ("LHB", "Beijing Hyundai"),
    ("LHD", "Dongfeng Honda"),
    ("LHG", "GAC Honda"),
    ("LHL", "Beijing Hyundai"),
    ("LJ1", "JAC"),
    ("LJ2", "JAC"),
    ("LJ3", "JAC"),
    ("LJ4", "JAC"),
    ("LJ5", "JAC"),
    ("LJ8", "JAC"),
    ("LJ9", "JAC"),
    ("LJA", "JAC"),
    ("LJB", "JAC"),
    ("LJC", "JAC"),
    ("LJD", "Dongfeng"),
    ("LJE", "JAC"),
    ("LJF", "JAC"),
    ("LJG", "JAC"),
    ("LJH", "JAC"),
    ("LJJ", "JAC"),
    ("LJK", "JAC"),
    ("LJL", "JAC"),
    ("LJM", "JAC"),
    ("LJN", "JAC"),
    ("LJP", "JAC"),
    ("LJR", "JAC"),
    ("LJS", "JAC"),
    ("LJT", "JAC"),
    ("LJU", "JAC"),
    ("LJV", "JAC"),
    ("LJW", "JAC"),
    ("LJX", "JAC"),
    ("LJY", "JAC"),
    ("LJZ", "JAC"),
    ("LKL", "Suzuki"),
    ("LKM", "Suzuki"),
    ("LL3", "Lifan"),
    ("LL6", "Huanghai"),
    ("LL8", "Lifan"),
    ("LLB", "Lifan"),
    ("LLC", "Lifan"),
    ("LLD", "Lifan"),
    ("LLE", "Lifan"),
    ("LLF", "Lifan"),
    ("LLG", "Lifan"),
    ("LLH", "Lifan"),
    ("LLJ", "Lifan"),
    ("LLK", "Lifan"),
    ("LLL", "Lifan"),
    ("LLM", "Lifan"),
    ("LLN", "Lifan"),
    ("LLP", "Lifan"),
    ("LLR", "Lifan"),
    ("LLS", "Lifan"),
    ("LLT", "Lifan"),
    ("LLU", "Lifan"),
    ("LLV", "Lifan"),
    ("LLW", "Lifan"),
    ("LLX", "Lifan"),
    ("LLY", "Lifan"),
    ("LLZ", "Lifan"),
    ("LM5", "SAIC"),
    ("LMB", "Beijing"),
    ("LMC", "Suzuki"),
    ("LMD", "SAIC"),
    ("LME", "SAIC"),
    ("LMF", "SAIC"),
    ("LMG", "GAC"),
    ("LMH", "SAIC"),
    ("LMJ", "SAIC"),
    ("LMK", "SAIC"),
    ("LML", "SAIC"),
    ("LMN", "SAIC"),
    ("LMP", "SAIC"),
    ("LMR", "SAIC"),
    ("LMS", "SAIC"),
    ("LMT", "SAIC"),
    ("LMU", "SAIC"),
    ("LMV", "SAIC"),
    ("LMW", "SAIC"),
    ("LMX", "SAIC"),
    ("LMY", "SAIC"),
    ("LMZ", "SAIC"),
    ("LN8", "Nissan"),
    ("LNA", "Nissan"),
    ("LNB", "Nissan"),
    ("LNC", "Nissan"),
    ("LND", "Nissan"),
    ("LNE", "Nissan"),
    ("LNF", "Nissan"),
    ("LNG", "Nissan"),
    ("LNH", "Nissan"),
    ("LNJ", "Nissan"),
    ("LNK", "Nissan"),
    ("LNL", "Nissan"),
    ("LNM", "Nissan"),
    ("LNN", "Nissan"),
    ("LNP", "Nissan"),
    ("LNR", "Nissan"),
    ("LNS", "Nissan"),
    ("LNT", "Nissan"),
    ("LNU", "Nissan"),
    ("LNV", "Nissan"),
    ("LNW", "Nissan"),
    ("LNX", "Nissan"),
    ("LNY", "Nissan"),
    ("LNZ", "Nissan"),
    ("LP1", "Chery"),
    ("LP3", "Peugeot"),
    ("LP5", "Mazda"),
    ("LP8", "Chery"),
    ("LPA", "Changan PSA"),
    ("LPB", "Chery"),
    ("LPC", "Chery"),
    ("LPD", "Chery"),
    ("LPE", "Lotus"),
    ("LPF", "Chery"),
    ("LPG", "Chery"),
    ("LPH", "Chery"),
    ("LPJ", "Chery"),
    ("LPK", "Chery"),
    ("LPL", "Chery"),
    ("LPM", "Chery"),
    ("LPN", "Chery"),
    ("LPP", "Chery"),
    ("LPR", "Chery"),
    ("LPS", "Polestar"),
    ("LPT", "Chery"),
    ("LPU", "Chery"),
    ("LPV", "Chery"),
    ("LPW", "Chery"),
    ("LPX", "Chery"),
    ("LPY", "Chery"),
    ("LPZ", "Chery"),
    ("LR1", "Tesla"),
    ("LRW", "Tesla"),
    ("LRZ", "Land Rover"),
    ("LS1", "SAIC"),
    ("LS2", "SAIC"),
    ("LS3", "SAIC"),
    ("LS4", "SAIC"),
    ("LS5", "Changan Suzuki"),
    ("LS6", "SAIC"),
    ("LS7", "SAIC"),
    ("LS8", "SAIC"),
    ("LS9", "SAIC"),
    ("LSA", "SAIC"),
    ("LSB", "SAIC"),
    ("LSC", "SAIC"),
    ("LSD", "SAIC"),
    ("LSE", "SAIC"),
    ("LSF", "Lifan"),
    ("LSG", "SAIC"),
    ("LSH", "SAIC"),
    ("LSJ", "SAIC"),
    ("LSK", "SAIC"),
    ("LSL", "SAIC"),
    ("LSM", "SAIC"),
    ("LSN", "SAIC"),
    ("LSP", "SAIC"),
    ("LSR", "SAIC"),
    ("LSS", "SAIC"),
    ("LST", "SAIC"),
    ("LSU", "SAIC"),
    ("LSV", "Volkswagen"),
    ("LSW", "SAIC"),
    ("LSX", "SAIC"),
    ("LSY", "MG"),
    ("LSZ", "SAIC"),
    ("LT0", "Ford"),
    ("LT1", "Lotus"),
    ("LT2", "Geely"),
    ("LT3", "Lynk & Co"),
    ("LT5", "Geely"),
    ("LT7", "Geely"),
    ("LT8", "Ford"),
    ("LT9", "Ford"),
    ("LTA", "Ford"),
    ("LTB", "Ford"),
    ("LTC", "Ford"),
    ("LTD", "Ford"),
    ("LTE", "Ford"),
    ("LTF", "Ford"),
    ("LTG", "Ford"),
    ("LTH", "Ford"),
    ("LTJ", "Ford"),
    ("LTK", "Ford"),
    ("LTL", "Ford"),
    ("LTM", "Ford"),
    ("LTN", "Ford"),
    ("LTP", "Ford"),
    ("LTR", "Ford"),
    ("LTS", "Ford"),
    ("LTT", "Ford"),
    ("LTU", "Ford"),
    ("LTV", "Ford"),
    ("LTW", "Ford"),
    ("LTX", "Ford"),
    ("LTY", "Ford"),
    ("LTZ", "Ford"),
    ("LUC", "Honda"),
    ("LUD", "Honda"),
    ("LUE", "Honda"),
    ("LUF", "Honda"),
    ("LUG", "Honda"),
    ("LUH", "Honda"),
    ("LUJ", "Honda"),
    ("LUK", "Honda"),
    ("LUL", "Honda"),
    ("LUM", "Honda"),
    ("LUN", "Honda"),
    ("LUP", "Honda"),
    ("LUR", "Honda"),
    ("LUS", "Honda"),
    ("LUT", "Honda"),
    ("LUU", "Honda"),
    ("LUV", "Honda"),
    ("LUW", "Honda"),
    ("LUX", "Honda"),
    ("LUY", "Honda"),
    ("LUZ", "Honda"),
    ("LV2", "Volvo"),
    ("LV3", "Volvo"),
    ("LV4", "Volvo"),
    ("LV5", "Volvo"),
    ("LV6", "Volvo"),
    ("LV7", "Volvo"),
    ("LV8", "Volvo"),
    ("LV9", "Volvo"),
    ("LVA", "Volvo"),
    ("LVB", "Volvo"),
    ("LVC", "Volvo"),
    ("LVD", "Volvo"),
    ("LVE", "Volvo"),
    ("LVF", "Volvo"),
    ("LVG", "GAC Toyota"),
    ("LVH", "FAW Toyota"),
    ("LVJ", "Volvo"),
    ("LVK", "Volvo"),
    ("LVL", "Volvo"),
    ("LVM", "Volvo"),
    ("LVN", "Volvo"),
    ("LVP", "Volvo"),
    ("LVR", "Mazda"),
    ("LVS", "Ford"),
    ("LVT", "Volvo"),
    ("LVU", "Volvo"),
    ("LVV", "Chery"),
    ("LVW", "Volkswagen"),
    ("LVX", "Volvo"),
    ("LVY", "Volvo"),
    ("LVZ", "Volvo"),
    ("LWB", "Changan"),
    ("LWC", "Changan"),
    ("LWD", "Changan"),
    ("LWE", "Changan"),
    ("LWF", "Changan"),
    ("LWG", "Changan"),
    ("LWH", "Changan"),
    ("LWJ", "Changan"),
    ("LWK", "Changan"),
    ("LWL", "Changan"),
    ("LWM", "Changan"),
    ("LWN", "Changan"),
    ("LWP", "Changan"),
    ("LWR", "Changan"),
    ("LWS", "Changan"),
    ("LWT", "Changan"),
    ("LWU", "Changan"),
    ("LWV", "GAC"),
    ("LWW", "Changan"),
    ("LWX", "Changan"),
    ("LWY", "Changan"),
    ("LWZ", "Changan"),
    ("LXG", "Xpeng"),
    ("LXH", "Xpeng"),
    ("LXJ", "Xpeng"),
    ("LXK", "Xpeng"),
    ("LXL", "Xpeng"),
    ("LXM", "Xpeng"),
    ("LXN", "Xpeng"),
    ("LXP", "Xpeng"),
    ("LXR", "Xpeng"),
    ("LXS", "Xpeng"),
    ("LXT", "Xpeng"),
    ("LXU", "Xpeng"),
    ("LXV", "Xpeng"),
    ("LXW", "Xpeng"),
    ("LXX", "Xpeng"),
    ("LXY", "Xpeng"),
    ("LXZ", "Xpeng"),
    ("LYB", "BYD"),
    ("LYC", "Lynk & Co"),
    ("LYG", "Guangzhou"),
    ("LYH", "FAW"),
    ("LYK", "Lynk & Co"),
    ("LYL", "Li Auto"),
    ("LYM", "BYD"),
    ("LYN", "Brilliance"),
    ("LYP", "Geely"),
    ("LYR", "FAW"),
    ("LYS", "Brilliance"),
    ("LYT", "FAW"),
    ("LYU", "Brilliance"),
    ("LYV", "Geely"),
    ("LYX", "BAW"),
    ("LYY", "Hyundai"),
    ("LZ0", "Opel"),
    ("LZA", "Opel"),
    ("LZB", "Opel"),
    ("LZC", "Opel"),
    ("LZD", "Isuzu"),
    ("LZE", "Isuzu"),
    ("LZF", "Leopaard"),
    ("LZG", "Chevrolet"),
    ("LZH", "Dongfeng"),
    ("LZJ", "Lamborghini"),
    ("LZK", "Haval"),
    ("LZL", "Great Wall"),
    ("LZM", "MAN"),
    ("LZN", "Tank"),
    ("LZP", "Chevrolet"),
    ("LZR", "Lincoln"),
    ("LZS", "Dacia"),
    ("LZT", "Santana"),
    ("LZU", "Porsche"),
    ("LZV", "Dodge"),
    ("LZW", "Nio"),
    ("LZX", "Hyundai"),
    ("LZY", "Yutong"),
    ("LZZ", "Changan"),
    ("MA1", "Mahindra"),
    ("MA3", "Suzuki"),
    ("MA6", "GM"),
    ("MA7", "Mitsubishi"),
    ("MAJ", "Ford"),
    ("MAK", "Honda"),
    ("MAL", "Hyundai"),
    ("MAN", "MAN"),
    ("MAR", "Maruti"),
    ("MAT", "Tata"),
    ("MAX", "Mahindra"),
    ("MB1", "Ashok Leyland"),
    ("MBH", "Hyundai"),
    ("MBJ", "Toyota"),
    ("MBR", "Mercedes-Benz"),
    ("MBS", "Suzuki"),
    ("MBU", "BMW"),
    ("MBX", "Mahindra"),
    ("MC1", "Volvo"),
    ("MC2", "Volvo"),
    ("MCA", "Fiat"),
    ("MCB", "GM"),
    ("MCD", "Nissan"),
    ("MCE", "Renault"),
    ("MCF", "Force"),
    ("MCG", "Nissan"),
    ("MCL", "Isuzu"),
    ("MCM", "Mitsubishi"),
    ("MCR", "Honda"),
    ("MCS", "Suzuki"),
    ("MCT", "Tata"),
    ("MCU", "Volvo"),
    ("MCW", "Volkswagen"),
    ("MD0", "Bajaj"),
    ("MD2", "Bajaj"),
    ("MD9", "Hero"),
    ("MDA", "Hero"),
    ("MDB", "Hero"),
    ("MDC", "Hero"),
    ("MDD", "Hero"),
    ("MDE", "Hero"),
    ("MDF", "Hero"),
    ("MDG", "Hero"),
    ("MDH", "Hero"),
    ("MDK", "Hero"),
    ("MDL", "Hero"),
    ("MDM", "Hero"),
    ("MDN", "Hero"),
    ("MDP", "Hero"),
    ("MDR", "Hero"),
    ("MDS", "Hero"),
    ("MDT", "Hero"),
    ("MDU", "Hero"),
    ("MDV", "Hero"),
    ("MDW", "Hero"),
    ("MDX", "Hero"),
    ("MDY", "Hero"),
    ("MDZ", "Yamaha"),
    ("ME1", "TVS"),
    ("ME3", "TVS"),
    ("ME4", "TVS"),
    ("ME9", "Royal Enfield"),
    ("MEA", "Royal Enfield"),
    ("MEB", "Royal Enfield"),
    ("MEC", "Royal Enfield"),
    ("MED", "Royal Enfield"),
    ("MEE", "Piaggio"),
    ("MEG", "Vespa"),
    ("MEH", "Royal Enfield"),
    ("MEJ", "Royal Enfield"),
    ("MEK", "Royal Enfield"),
    ("MEL", "Royal Enfield"),
    ("MEM", "Royal Enfield"),
    ("MEN", "Royal Enfield"),
    ("MEP", "Royal Enfield"),
    ("MER", "Royal Enfield"),
    ("MES", "Royal Enfield"),
    ("MET", "Royal Enfield"),
    ("MEU", "Royal Enfield"),
    ("MEV", "Royal Enfield"),
    ("MEW", "Royal Enfield"),
    ("MEX", "Volkswagen"),
    ("MEY", "Royal Enfield"),
    ("MEZ", "Royal Enfield"),
    ("SA9", "Morgan"),
    ("SAB", "Optare"),
    ("SAC", "Daimler"),
    ("SAD", "Jaguar"),
    ("SAF", "Jaguar"),
    ("SAG", "Jaguar"),
    ("SAH", "Honda"),
    ("SAJ", "Jaguar"),
    ("SAK", "Jaguar"),
    ("SAL", "Land Rover"),
    ("SAM", "Land Rover"),
    ("SAN", "Land Rover"),
    ("SAP", "Land Rover"),
    ("SAR", "Rover"),
    ("SAS", "Freight Rover"),
    ("SAT", "Triumph"),
    ("SAU", "Austin"),
    ("SAV", "MG Rover"),
    ("SAW", "Morris"),
    ("SAX", "Jaguar"),
    ("SAZ", "Caterham"),
    ("SB1", "Toyota"),
    ("SBB", "Peugeot"),
    ("SBC", "Rolls-Royce"),
    ("SBM", "McLaren"),
    ("SCA", "Rolls-Royce"),
    ("SCB", "Bentley"),
    ("SCC", "Lotus"),
    ("SCD", "Maybach"),
    ("SCE", "DeLorean"),
    ("SCF", "Aston Martin"),
    ("SCG", "Scania"),
    ("SCH", "Aston Martin"),
    ("SCK", "Scania"),
    ("SCL", "Scania"),
    ("SCM", "Scania"),
    ("SCN", "Scania"),
    ("SCP", "Scania"),
    ("SCR", "Scania"),
    ("SCS", "Scania"),
    ("SCT", "Scania"),
    ("SCU", "Scania"),
    ("SCV", "Scania"),
    ("SCW", "Scania"),
    ("SCX", "Scania"),
    ("SCY", "Scania"),
    ("SCZ", "Scania"),
    ("SD1", "Rover"),
    ("SD2", "Nissan"),
    ("SDC", "Mercedes-Benz"),
    ("SDF", "Ford"),
    ("SDG", "General Motors"),
    ("SDH", "Honda"),
    ("SDK", "Jaguar"),
    ("SED", "General Motors Europe"),
    ("SEY", "LDV"),
    ("SFA", "Ford"),
    ("SFB", "Ford"),
    ("SFC", "Ford"),
    ("SFD", "Alexander Dennis"),
    ("SFE", "Alexander Dennis"),
    ("SFF", "Ford"),
    ("SFG", "Ford"),
    ("SFH", "Ford"),
    ("SFJ", "Ford"),
    ("SFK", "Ford"),
    ("SFL", "Ford"),
    ("SFN", "Ford"),
    ("SFP", "Ford"),
    ("SFR", "Ford"),
    ("SFS", "Ford"),
    ("SFT", "Iveco"),
    ("SH0", "Honda"),
    ("SHA", "Honda"),
    ("SHB", "Honda"),
    ("SHC", "Honda"),
    ("SHD", "Honda"),
    ("SHE", "Honda"),
    ("SHF", "Honda"),
    ("SHG", "Honda"),
    ("SHH", "Honda"),
    ("SHJ", "Honda"),
    ("SHK", "Honda"),
    ("SHL", "Honda"),
    ("SHM", "Honda"),
    ("SHN", "Honda"),
    ("SHP", "Honda"),
    ("SHR", "Honda"),
    ("SHS", "Honda"),
    ("SHT", "Honda"),
    ("SHU", "Honda"),
    ("SHV", "Honda"),
    ("SHW", "Honda"),
    ("SHX", "Honda"),
    ("SHY", "Honda"),
    ("SHZ", "Honda"),
    ("SJD", "Nissan"),
    ("SJH", "Toyota"),
    ("SJK", "Koenigsegg"),
    ("SJN", "Nissan"),
    ("SJR", "Jaguar"),
    ("SKF", "Vauxhall"),
    ("SKV", "Volvo"),
    ("SL0", "Rover"),
    ("SMT", "Triumph"),
    ("SN1", "Nissan"),
    ("SN3", "Nissan"),
    ("SN4", "Nissan"),
    ("SN6", "Nissan"),
    ("SN8", "Nissan"),
    ("SNC", "Nissan"),
    ("SPV", "Rolls-Royce"),
    ("SRF", "MG"),
    ("SRH", "MG"),
    ("SRR", "Rover"),
    ("SSA", "Westfield"),
    ("SSC", "SSC"),
    ("SSG", "Ginetta"),
    ("SSH", "Honda"),
    ("SSK", "Skoda"),
    ("STA", "TVR"),
    ("STJ", "Triumph"),
    ("SUF", "Fiat"),
    ("SUL", "Lotus"),
    ("SUN", "Nissan"),
    ("SUU", "Lotus"),
    ("SVW", "Volkswagen"),
    ("SXC", "Caterham"),
    ("SYA", "Mazda"),
    ("SYE", "Mazda"),
    ("VF1", "Renault"),
    ("VF2", "Renault"),
    ("VF3", "Peugeot"),
    ("VF4", "Peugeot"),
    ("VF5", "Renault"),
    ("VF6", "Renault"),
    ("VF7", "Citroën"),
    ("VF8", "Matra"),
    ("VF9", "Bugatti"),
    ("VFA", "Alpine"),
    ("VFB", "Citroën"),
    ("VFC", "Citroën"),
    ("VFD", "Peugeot"),
    ("VFE", "Dacia"),
    ("VFF", "Peugeot"),
    ("VFG", "Talbot"),
    ("VFH", "Peugeot"),
    ("VFJ", "Bugatti"),
    ("VFK", "Renault"),
    ("VFL", "Renault"),
    ("VFM", "Ligier"),
    ("VFN", "Renault"),
    ("VFP", "Peugeot"),
    ("VFR", "Renault"),
    ("VFS", "Renault"),
    ("VFT", "Gruau"),
    ("VFU", "Aixam"),
    ("VFV", "Renault"),
    ("VFW", "Renault"),
    ("VFX", "Venturi"),
    ("VFY", "Citroën"),
    ("VFZ", "Citroën"),
    ("VG1", "Autovia"),
    ("VG5", "MBK"),
    ("VG6", "Yamaha"),
    ("VG7", "Yamaha"),
    ("VGA", "MBK"),
    ("VGB", "MBK"),
    ("VGC", "MBK"),
    ("VGD", "Yamaha"),
    ("VGE", "Citroën"),
    ("VGF", "Yamaha"),
    ("VGG", "Yamaha"),
    ("VGH", "Mega"),
    ("VGJ", "MBK"),
    ("VGK", "MBK"),
    ("VGL", "Yamaha"),
    ("VGM", "MBK"),
    ("VGN", "MBK"),
    ("VGP", "MBK"),
    ("VGR", "MBK"),
    ("VGS", "MBK"),
    ("VGT", "MBK"),
    ("VGU", "MBK"),
    ("VGV", "MBK"),
    ("VGW", "MBK"),
    ("VGX", "MBK"),
    ("VGY", "MBK"),
    ("VGZ", "MBK"),
    ("VLA", "Santana"),
    ("VLB", "Santana"),
    ("VLC", "Santana"),
    ("VLD", "Santana"),
    ("VLE", "Citroën"),
    ("VLF", "Peugeot"),
    ("VLG", "Nissan"),
    ("VLH", "Citroën"),
    ("VLK", "Santana"),
    ("VLL", "Santana"),
    ("VLM", "Santana"),
    ("VLN", "Santana"),
    ("VLP", "Santana"),
    ("VLR", "Santana"),
    ("VLS", "Seat"),
    ("VLT", "Santana"),
    ("VLU", "Seat"),
    ("VLV", "Seat"),
    ("VLW", "Seat"),
    ("VLX", "Seat"),
    ("VLY", "Seat"),
    ("VLZ", "Seat"),
    ("VN1", "Nissan"),
    ("VN2", "Nissan"),
    ("VN3", "Nissan"),
    ("VN4", "Nissan"),
    ("VN5", "Nissan"),
    ("VN6", "Nissan"),
    ("VN7", "Nissan"),
    ("VN8", "Nissan"),
    ("VN9", "Nissan"),
    ("VNA", "Nissan"),
    ("VNB", "Nissan"),
    ("VNC", "Nissan"),
    ("VND", "Nissan"),
    ("VNE", "Iveco"),
    ("VNF", "Nissan"),
    ("VNG", "Nissan"),
    ("VNH", "Nissan"),
    ("VNJ", "Nissan"),
    ("VNK", "Toyota"),
    ("VNL", "Nissan"),
    ("VNM", "Nissan"),
    ("VNN", "Nissan"),
    ("VNP", "Nissan"),
    ("VNR", "Nissan"),
    ("VNS", "Nissan"),
    ("VNT", "Nissan"),
    ("VNU", "Nissan"),
    ("VNV", "Nissan"),
    ("VNW", "Nissan"),
    ("VNX", "Nissan"),
    ("VNY", "Nissan"),
    ("VNZ", "Nissan"),
    ("VS0", "Otokar"),
    ("VS1", "Otokar"),
    ("VS2", "Otokar"),
    ("VS3", "Seat"),
    ("VS4", "Seat"),
    ("VS5", "Seat"),
    ("VS6", "Ford"),
    ("VS7", "Nissan"),
    ("VS8", "Seat"),
    ("VS9", "Carrocerias Ayats"),
    ("VSA", "Mercedes-Benz"),
    ("VSB", "Peugeot"),
    ("VSC", "Citroën"),
    ("VSD", "General Motors"),
    ("VSE", "Suzuki"),
    ("VSF", "Seat"),
    ("VSG", "Nissan"),
    ("VSH", "Nissan"),
    ("VSJ", "Nissan"),
    ("VSK", "Nissan"),
    ("VSL", "Santana"),
    ("VSM", "Seat"),
    ("VSN", "Opel"),
    ("VSP", "Volkswagen"),
    ("VSR", "Renault"),
    ("VSS", "Seat"),
    ("VST", "Nissan"),
    ("VSU", "Santana"),
    ("VSV", "Volkswagen"),
    ("VSW", "Nissan"),
    ("VSX", "Opel"),
    ("VSY", "Renault"),
    ("VSZ", "Seat"),
    ("VTD", "Daewoo"),
    ("VTE", "Citroën"),
    ("VTG", "Saab"),
    ("VTH", "Hyundai"),
    ("VTJ", "Suzuki"),
    ("VTK", "Honda"),
    ("VTL", "Rover"),
    ("VTM", "Honda"),
    ("VTN", "Honda"),
    ("VTR", "Derbi"),
    ("VTS", "Seat"),
    ("VTT", "Suzuki"),
    ("VTU", "Seat"),
    ("VTV", "Nissan"),
    ("VTW", "Ford"),
    ("VTX", "Nissan"),
    ("VTY", "Daelim"),
    ("VTZ", "Daelim"),
    ("VUA", "Santana"),
    ("VUB", "Audi"),
    ("VUC", "Volkswagen"),
    ("VUD", "Volkswagen"),
    ("VUE", "Volkswagen"),
    ("VUF", "Mercedes-Benz"),
    ("VUG", "Volkswagen"),
    ("VUH", "Volkswagen"),
    ("VUJ", "Volkswagen"),
    ("VUK", "Volkswagen"),
    ("VUL", "Volkswagen"),
    ("VUM", "Mercedes-Benz"),
    ("VUN", "Mercedes-Benz"),
    ("VUP", "Volkswagen"),
    ("VUR", "Seat"),
    ("VUS", "Seat"),
    ("VUT", "Seat"),
    ("VUU", "Seat"),
    ("VUV", "Seat"),
    ("VUW", "Seat"),
    ("VUX", "Seat"),
    ("VUY", "Seat"),
    ("VUZ", "Seat"),
    ("W0L", "Opel"),
    ("W0P", "Opel"),
    ("W0V", "Opel"),
    ("W0X", "Opel"),
    ("WA0", "Audi"),
    ("WA1", "Audi"),
    ("WA8", "Audi"),
    ("WAB", "Audi"),
    ("WAC", "Audi"),
    ("WAD", "Audi"),
    ("WAE", "Audi"),
    ("WAF", "Audi"),
    ("WAG", "Audi"),
    ("WAH", "Audi"),
    ("WAJ", "Audi"),
    ("WAK", "Audi"),
    ("WAL", "Audi"),
    ("WAM", "Audi"),
    ("WAN", "Audi"),
    ("WAP", "Audi"),
    ("WAR", "Audi"),
    ("WAS", "Audi"),
    ("WAT", "Audi"),
    ("WAU", "Audi"),
    ("WAV", "Audi"),
    ("WAW", "Audi"),
    ("WAX", "Audi"),
    ("WAY", "Audi"),
    ("WAZ", "Audi"),
    ("WB1", "BMW"),
    ("WB2", "BMW"),
    ("WB3", "BMW"),
    ("WB4", "BMW"),
    ("WB5", "BMW"),
    ("WB6", "BMW"),
    ("WB7", "BMW"),
    ("WB8", "BMW"),
    ("WB9", "BMW"),
    ("WBA", "BMW"),
    ("WBB", "BMW"),
    ("WBC", "BMW"),
    ("WBD", "BMW"),
    ("WBE", "BMW"),
    ("WBF", "BMW"),
    ("WBG", "BMW"),
    ("WBH", "BMW"),
    ("WBJ", "BMW"),
    ("WBK", "BMW"),
    ("WBL", "BMW"),
    ("WBM", "BMW"),
    ("WBN", "BMW"),
    ("WBP", "BMW"),
    ("WBR", "BMW"),
    ("WBS", "BMW"),
    ("WBT", "BMW"),
    ("WBU", "BMW"),
    ("WBV", "BMW"),
    ("WBW", "BMW"),
    ("WBX", "BMW"),
    ("WBY", "BMW"),
    ("WBZ", "BMW"),
    ("WCA", "Bentley"),
    ("WCH", "SEG"),
    ("WD0", "Mercedes-Benz"),
    ("WD1", "Mercedes-Benz"),
    ("WD2", "Mercedes-Benz"),
    ("WD3", "Mercedes-Benz"),
    ("WD4", "Mercedes-Benz"),
    ("WD5", "Mercedes-Benz"),
    ("WD6", "Mercedes-Benz"),
    ("WD7", "Mercedes-Benz"),
    ("WD8", "Mercedes-Benz"),
    ("WD9", "Mercedes-Benz"),
    ("WDA", "Mercedes-Benz"),
    ("WDB", "Mercedes-Benz"),
    ("WDC", "Mercedes-Benz"),
    ("WDD", "Mercedes-Benz"),
    ("WDE", "Mercedes-Benz"),
    ("WDF", "Mercedes-Benz"),
    ("WDG", "Mercedes-Benz"),
    ("WDH", "Mercedes-Benz"),
    ("WDJ", "Mercedes-Benz"),
    ("WDK", "Mercedes-Benz"),
    ("WDL", "Mercedes-Benz"),
    ("WDM", "Mercedes-Benz"),
    ("WDN", "Mercedes-Benz"),
    ("WDP", "Mercedes-Benz"),
    ("WDR", "Mercedes-Benz"),
    ("WDS", "Mercedes-Benz"),
    ("WDT", "Mercedes-Benz"),
    ("WDU", "Mercedes-Benz"),
    ("WDV", "Mercedes-Benz"),
    ("WDW", "Mercedes-Benz"),
    ("WDX", "Mercedes-Benz"),
    ("WDY", "Mercedes-Benz"),
    ("WDZ", "Mercedes-Benz"),
    ("WEA", "Mercedes-Benz"),
    ("WEB", "Maybach"),
    ("WEC", "Smart"),
    ("WED", "Smart"),
    ("WF0", "Ford"),
    ("WF1", "Ford"),
    ("WKA", "Neoplan"),
    ("WKE", "Witte"),
    ("WKK", "Kässbohrer"),
    ("WMA", "MAN"),
    ("WMB", "MAN"),
    ("WMC", "MAN"),
    ("WMD", "MAN"),
    ("WME", "Smart"),
    ("WMF", "Mercedes-Benz"),
    ("WMH", "MAN"),
    ("WMJ", "MAN"),
    ("WMK", "MAN"),
    ("WML", "MAN"),
    ("WMM", "MAN"),
    ("WMN", "MAN"),
    ("WMP", "MAN"),
    ("WMR", "MAN"),
    ("WMS", "MAN"),
    ("WMT", "MAN"),
    ("WMU", "MAN"),
    ("WMV", "MAN"),
    ("WMW", "Mini"),
    ("WMX", "Mercedes-Benz"),
    ("WMY", "MAN"),
    ("WMZ", "MAN"),
    ("WP0", "Porsche"),
    ("WP1", "Porsche"),
    ("WPZ", "Porsche"),
    ("WR1", "Volkswagen"),
    ("WRU", "Audi"),
    ("WSM", "Schmitz"),
    ("WTF", "Volkswagen"),
    ("WUA", "Audi"),
    ("WUP", "Audi"),
    ("WV1", "Volkswagen"),
    ("WV2", "Volkswagen"),
    ("WV3", "Volkswagen"),
    ("WV4", "Volkswagen"),
    ("WV5", "Volkswagen"),
    ("WV6", "Volkswagen"),
    ("WV7", "Volkswagen"),
    ("WV8", "Volkswagen"),
    ("WV9", "Volkswagen"),
    ("WVA", "Volkswagen"),
    ("WVB", "Volkswagen"),
    ("WVC", "Volkswagen"),
    ("WVD", "Volkswagen"),
    ("WVE", "Volkswagen"),
    ("WVF", "Volkswagen"),
    ("WVG", "Volkswagen"),
    ("WVH", "Volkswagen"),
    ("WVJ", "Volkswagen"),
    ("WVK", "Volkswagen"),
    ("WVL", "Volkswagen"),
    ("WVM", "Volkswagen"),
    ("WVN", "Volkswagen"),
    ("WVP", "Volkswagen"),
    ("WVR", "Volkswagen"),
    ("WVS", "Volkswagen"),
    ("WVT", "Volkswagen"),
    ("WVU", "Volkswagen"),
    ("WVV", "Volkswagen"),
    ("WVW", "Volkswagen"),
    ("WVX", "Volkswagen"),
    ("WVY", "Volkswagen"),
    ("WVZ", "Volkswagen"),
    ("WXP", "Volkswagen"),
    ("WXX", "Volkswagen"),
    ("WYH", "Borgward"),
    ("WZA", "Audi"),
    ("WZZ", "Volkswagen"),
    ("X1E", "Lada"),
    ("X1M", "PAZ"),
    ("X3L", "Lada"),
    ("X4A", "AvtoVAZ"),
    ("X4X", "AvtoVAZ"),
    ("X5L", "Renault"),
    ("X7A", "Renault"),
    ("X7J", "Renault"),
    ("X7L", "Renault"),
    ("X7M", "Mitsubishi"),
    ("X89", "Citroën"),
    ("X8A", "Toyota"),
    ("X8E", "Peugeot"),
    ("X8X", "Volkswagen"),
    ("X8Z", "Opel"),
    ("X96", "Ssangyong"),
    ("X9L", "GM"),
    ("X9P", "Kia"),
    ("XD2", "UAZ"),
    ("XD3", "Nissan"),
    ("XE0", "Hyundai"),
    ("XEE", "Kia"),
    ("XET", "KAMAZ"),
    ("XF9", "Chevrolet"),
    ("XFA", "Hyundai"),
    ("XFC", "KAMAZ"),
    ("XK9", "Isuzu"),
    ("XKU", "Kia"),
    ("XMA", "Renault"),
    ("XMC", "Mitsubishi"),
    ("XMN", "Nissan"),
    ("XN1", "KAMAZ"),
    ("XSU", "Lada"),
    ("XT3", "Lada"),
    ("XTA", "Lada"),
    ("XTC", "KAMAZ"),
    ("XTF", "Ford"),
    ("XTH", "Renault"),
    ("XTR", "Lada"),
    ("XTT", "UAZ"),
    ("XTU", "Chevrolet"),
    ("XTY", "Mazda"),
    ("XU3", "Bogdan"),
    ("XU5", "Kia"),
    ("XU8", "Solaris"),
    ("XUA", "ZAZ"),
    ("XUB", "Hyundai"),
    ("XUE", "AvtoVAZ"),
    ("XUF", "GM"),
    ("XUJ", "Renault"),
    ("XUN", "Mitsubishi"),
    ("XUU", "GM"),
    ("XUW", "BMW"),
    ("XUX", "Ford"),
    ("XVL", "Moskvich"),
    ("XW7", "Ford"),
    ("XW8", "Volkswagen"),
    ("XWB", "Volkswagen"),
    ("XWE", "Kia"),
    ("XWF", "Opel"),
    ("XWK", "Hyundai"),
    ("XWP", "Renault"),
    ("XWV", "Nissan"),
    ("XXK", "Kavz"),
    ("XXU", "Toyota"),
    ("XXV", "Chery"),
    ("XYL", "Lada"),
    ("XZ9", "Lada"),
    ("XZU", "Opel"),
    ("XZV", "Skoda"),
    ("YB1", "Volvo"),
    ("YB2", "Volvo"),
    ("YB3", "Volvo"),
    ("YBW", "Volkswagen"),
    ("YC1", "Yamaha"),
    ("YCM", "Mazda"),
    ("YCZ", "MZ"),
    ("YE1", "Saab"),
    ("YE2", "Scania"),
    ("YED", "Saab"),
    ("YES", "Yamaha"),
    ("YH2", "Honda"),
    ("YK1", "Saab"),
    ("YK2", "Saab"),
    ("YK3", "Saab"),
    ("YK4", "Saab"),
    ("YK5", "Saab"),
    ("YK6", "Saab"),
    ("YK7", "Saab"),
    ("YK8", "Saab"),
    ("YK9", "Saab"),
    ("YKA", "Saab"),
    ("YKB", "Saab"),
    ("YKC", "Saab"),
    ("YKD", "Saab"),
    ("YKE", "Saab"),
    ("YKF", "Saab"),
    ("YKG", "Saab"),
    ("YKH", "Saab"),
    ("YKJ", "Saab"),
    ("YKK", "Saab"),
    ("YKL", "Saab"),
    ("YKM", "Saab"),
    ("YKN", "Saab"),
    ("YKP", "Saab"),
    ("YKR", "Saab"),
    ("YKS", "Saab"),
    ("YKT", "Saab"),
    ("YKU", "Saab"),
    ("YKV", "Saab"),
    ("YKW", "Saab"),
    ("YKX", "Saab"),
    ("YKY", "Saab"),
    ("YKZ", "Saab"),
    ("YLB", "Volvo"),
    ("YLR", "MAN"),
    ("YS1", "Scania"),
    ("YS2", "Scania"),
    ("YS3", "Saab"),
    ("YS4", "Scania"),
    ("YS5", "Scania"),
    ("YS6", "Scania"),
    ("YS7", "Scania"),
    ("YS8", "Scania"),
    ("YS9", "Carrus"),
    ("YSA", "Scania"),
    ("YSB", "Scania"),
    ("YSC", "Scania"),
    ("YSD", "Scania"),
    ("YSE", "Scania"),
    ("YSF", "Scania"),
    ("YSG", "Scania"),
    ("YSH", "Scania"),
    ("YSJ", "Scania"),
    ("YSK", "Scania"),
    ("YSL", "Scania"),
    ("YSM", "Scania"),
    ("YSN", "Scania"),
    ("YSP", "Scania"),
    ("YSR", "Scania"),
    ("YSS", "Scania"),
    ("YST", "Scania"),
    ("YSU", "Scania"),
    ("YSV", "Scania"),
    ("YSW", "Scania"),
    ("YSX", "Scania"),
    ("YSY", "Scania"),
    ("YSZ", "Scania"),
    ("YT9", "Koenigsegg"),
    ("YTN", "Saab"),
    ("YTP", "Saab"),
    ("YTR", "Saab"),
    ("YTS", "Saab"),
    ("YTT", "Saab"),
    ("YTU", "Saab"),
    ("YTV", "Saab"),
    ("YTW", "Saab"),
    ("YTX", "Saab"),
    ("YTY", "Saab"),
    ("YTZ", "Saab"),
    ("YUA", "Husqvarna"),
    ("YUB", "Husqvarna"),
    ("YUC", "Husqvarna"),
    ("YUD", "Husqvarna"),
    ("YUE", "Husqvarna"),
    ("YUF", "Husqvarna"),
    ("YUG", "Husqvarna"),
    ("YUH", "Husqvarna"),
    ("YUJ", "Husqvarna"),
    ("YUK", "Husqvarna"),
    ("YUL", "Husqvarna"),
    ("YUM", "Husqvarna"),
    ("YUN", "Husqvarna"),
    ("YUP", "Husqvarna"),
    ("YUR", "Husqvarna"),
    ("YUS", "Husqvarna"),
    ("YUT", "Husqvarna"),
    ("YUU", "Husqvarna"),
    ("YUV", "Husqvarna"),
    ("YUW", "Husqvarna"),
    ("YUX", "Husqvarna"),
    ("YUY", "Husqvarna"),
    ("YUZ", "Husqvarna"),
    ("YV1", "Volvo"),
    ("YV2", "Volvo"),
    ("YV3", "Volvo"),
    ("YV4", "Volvo"),
    ("YV5", "Volvo"),
    ("YV6", "Volvo"),
    ("YV7", "Volvo"),
    ("YV8", "Volvo"),
    ("YV9", "Volvo"),
    ("YVA", "Volvo"),
    ("YVB", "Volvo"),
    ("YVC", "Volvo"),
    ("YVD", "Volvo"),
    ("YVE", "Volvo"),
    ("YVF", "Volvo"),
    ("YVG", "Volvo"),
    ("YVH", "Volvo"),
    ("YVJ", "Volvo"),
    ("YVK", "Volvo"),
    ("YVL", "Volvo"),
    ("YVM", "Volvo"),
    ("YVN", "Volvo"),
    ("YVP", "Volvo"),
    ("YVR", "Volvo"),
    ("YVS", "Volvo"),
    ("YVT", "Volvo"),
    ("YVU", "Volvo"),
    ("YVV", "Volvo"),
    ("YVW", "Volvo"),
    ("YVX", "Volvo"),
    ("YVY", "Volvo"),
    ("YVZ", "Volvo"),
    ("YWA", "Volvo"),
    ("YWB", "Volvo"),
    ("YWC", "Volvo"),
    ("YWD", "Volvo"),
    ("YWE", "Volvo"),
    ("YWF", "Volvo"),
    ("YWG", "Volvo"),
    ("YWH", "Volvo"),
    ("YWJ", "Volvo"),
    ("YWK", "Volvo"),
    ("YWL", "Volvo"),
    ("YWM", "Volvo"),
    ("YWN", "Volvo"),
    ("YWP", "Volvo"),
    ("YWR", "Volvo"),
    ("YWS", "Volvo"),
    ("YWT", "Volvo"),
    ("YWU", "Volvo"),
    ("YWV", "Volvo"),
    ("YWW", "Volvo"),
    ("YWX", "Volvo"),
    ("YWY", "Volvo"),
    ("YWZ", "Volvo"),
    ("Z8M", "Malaguti"),
    ("ZA2", "Innocenti"),
    ("ZA8", "Autobianchi"),
    ("ZA9", "Bugatti"),
    ("ZAA", "Alfa Romeo"),
    ("ZAE", "Alfa Romeo"),
    ("ZAF", "Alfa Romeo"),
    ("ZAG", "Alfa Romeo"),
    ("ZAH", "Alfa Romeo"),
    ("ZAJ", "Alfa Romeo"),
    ("ZAK", "Alfa Romeo"),
    ("ZAL", "Alfa Romeo"),
    ("ZAM", "Maserati"),
    ("ZAN", "Maserati"),
    ("ZAP", "Alfa Romeo"),
    ("ZAR", "Alfa Romeo"),
    ("ZAS", "Alfa Romeo"),
    ("ZAT", "Alfa Romeo"),
    ("ZAU", "Alfa Romeo"),
    ("ZAV", "Alfa Romeo"),
    ("ZAW", "Alfa Romeo"),
    ("ZAX", "Alfa Romeo"),
    ("ZAY", "Alfa Romeo"),
    ("ZAZ", "Alfa Romeo"),
    ("ZBA", "Fiat"),
    ("ZBB", "Fiat"),
    ("ZBC", "Fiat"),
    ("ZBD", "Fiat"),
    ("ZBE", "Fiat"),
    ("ZBF", "Fiat"),
    ("ZBG", "Fiat"),
    ("ZBH", "Fiat"),
    ("ZBJ", "Fiat"),
    ("ZBK", "Fiat"),
    ("ZBL", "Fiat"),
    ("ZBM", "Fiat"),
    ("ZBN", "Fiat"),
    ("ZBP", "Fiat"),
    ("ZBR", "Fiat"),
    ("ZBS", "Fiat"),
    ("ZBT", "Fiat"),
    ("ZBU", "Fiat"),
    ("ZBV", "Fiat"),
    ("ZBW", "Fiat"),
    ("ZBX", "Fiat"),
    ("ZBY", "Fiat"),
    ("ZBZ", "Fiat"),
    ("ZC2", "Chrysler"),
    ("ZCA", "IBC Vehicles"),
    ("ZCF", "Iveco"),
    ("ZCG", "Cagiva"),
    ("ZCH", "Honda"),
    ("ZCJ", "Innocenti"),
    ("ZCK", "Innocenti"),
    ("ZCL", "Innocenti"),
    ("ZCM", "Innocenti"),
    ("ZCN", "Innocenti"),
    ("ZCP", "Innocenti"),
    ("ZCR", "Innocenti"),
    ("ZCS", "Innocenti"),
    ("ZCT", "Innocenti"),
    ("ZCU", "Innocenti"),
    ("ZCV", "Innocenti"),
    ("ZCW", "Innocenti"),
    ("ZCX", "Innocenti"),
    ("ZCY", "Innocenti"),
    ("ZCZ", "Innocenti"),
    ("ZD0", "Yamaha"),
    ("ZD3", "Beta"),
    ("ZD4", "Aprilia"),
    ("ZDC", "Honda"),
    ("ZDF", "Ferrari"),
    ("ZDG", "Ducati"),
    ("ZDH", "Husqvarna"),
    ("ZDL", "Ducati"),
    ("ZDM", "Ducati"),
    ("ZDN", "Moto Guzzi"),
    ("ZDP", "Moto Morini"),
    ("ZDS", "Aprilia"),
    ("ZDT", "TM"),
    ("ZDV", "Vespa"),
    ("ZDW", "Laverda"),
    ("ZDX", "Cagiva"),
    ("ZDY", "Yamaha"),
    ("ZDZ", "MV Agusta"),
    ("ZEA", "KTM"),
    ("ZEB", "KTM"),
    ("ZEC", "KTM"),
    ("ZED", "KTM"),
    ("ZEE", "Piaggio"),
    ("ZEF", "Bimota"),
    ("ZEG", "Moto Guzzi"),
    ("ZEH", "Husqvarna"),
    ("ZEJ", "Maico"),
    ("ZEL", "Laverda"),
    ("ZEM", "Malaguti"),
    ("ZEN", "Moto Guzzi"),
    ("ZEP", "Peugeot"),
    ("ZES", "Suzuki"),
    ("ZET", "Italjet"),
    ("ZFA", "Fiat"),
    ("ZFB", "Fiat"),
    ("ZFC", "Fiat"),
    ("ZFD", "Fiat"),
    ("ZFE", "Fiat"),
    ("ZFF", "Ferrari"),
    ("ZFG", "Fiat"),
    ("ZFH", "Fiat"),
    ("ZFJ", "Fiat"),
    ("ZFK", "Fiat"),
    ("ZFL", "Fiat"),
    ("ZFM", "Fiat"),
    ("ZFN", "Fiat"),
    ("ZFP", "Fiat"),
    ("ZFR", "Fiat"),
    ("ZFS", "Fiat"),
    ("ZFT", "Fiat"),
    ("ZFU", "Fiat"),
    ("ZFV", "Fiat"),
    ("ZFW", "Fiat"),
    ("ZFX", "Fiat"),
    ("ZFY", "Fiat"),
    ("ZFZ", "Fiat"),
    ("ZGA", "Iveco"),
    ("ZGB", "Iveco"),
    ("ZGC", "Iveco"),
    ("ZGD", "Iveco"),
    ("ZGE", "Iveco"),
    ("ZGF", "Iveco"),
    ("ZGG", "Moto Guzzi"),
    ("ZGH", "Gilera"),
    ("ZGJ", "Iveco"),
    ("ZGK", "Iveco"),
    ("ZGL", "Iveco"),
    ("ZGM", "Iveco"),
    ("ZGN", "Iveco"),
    ("ZGP", "Iveco"),
    ("ZGR", "Gilera"),
    ("ZGS", "Iveco"),
    ("ZGT", "Iveco"),
    ("ZGU", "Moto Guzzi"),
    ("ZGV", "Iveco"),
    ("ZGW", "Iveco"),
    ("ZGX", "Iveco"),
    ("ZGY", "Iveco"),
    ("ZGZ", "Iveco"),
    ("ZH2", "Hyosung"),
    ("ZHN", "Piaggio"),
    ("ZHP", "Piaggio"),
    ("ZHR", "Piaggio"),
    ("ZHS", "Piaggio"),
    ("ZHT", "Piaggio"),
    ("ZHW", "Lamborghini"),
    ("ZJ2", "Innocenti"),
    ("ZJM", "Piaggio"),
    ("ZJN", "Innocenti"),
    ("ZJP", "Piaggio"),
    ("ZJR", "Piaggio"),
    ("ZJS", "Piaggio"),
    ("ZJT", "Piaggio"),
    ("ZJY", "Yamaha"),
    ("ZKA", "Kawasaki"),
    ("ZKB", "Kawasaki"),
    ("ZKC", "Kawasaki"),
    ("ZKD", "Kawasaki"),
    ("ZKE", "Kawasaki"),
    ("ZKF", "Kawasaki"),
    ("ZKG", "Kawasaki"),
    ("ZKH", "Honda"),
    ("ZKJ", "Kawasaki"),
    ("ZKK", "Kawasaki"),
    ("ZKL", "Kawasaki"),
    ("ZKM", "Kawasaki"),
    ("ZKN", "Kawasaki"),
    ("ZKP", "Kawasaki"),
    ("ZKR", "Kawasaki"),
    ("ZKS", "Kawasaki"),
    ("ZKT", "Kawasaki"),
    ("ZKU", "Kawasaki"),
    ("ZKV", "Kawasaki"),
    ("ZKW", "Kawasaki"),
    ("ZKX", "Kawasaki"),
    ("ZKY", "Kawasaki"),
    ("ZKZ", "Kawasaki"),
    ("ZL0", "Aprilia"),
    ("ZLA", "Lancia"),
    ("ZLB", "Lancia"),
    ("ZLC", "Lancia"),
    ("ZLD", "Lancia"),
    ("ZLE", "Lancia"),
    ("ZLF", "Lancia"),
    ("ZLG", "Lancia"),
    ("ZLH", "Lancia"),
    ("ZLJ", "Lancia"),
    ("ZLK", "Lancia"),
    ("ZLL", "Lancia"),
    ("ZLM", "Lancia"),
    ("ZLN", "Lancia"),
    ("ZLP", "Lancia"),
    ("ZLR", "Lancia"),
    ("ZLS", "Lancia"),
    ("ZLT", "Lancia"),
    ("ZLU", "Lancia"),
    ("ZLV", "Lancia"),
    ("ZLW", "Lancia"),
    ("ZLX", "Lancia"),
    ("ZLY", "Lancia"),
    ("ZLZ", "Lancia"),
    ("ZN1", "Maserati"),
    ("ZN2", "Maserati"),
    ("ZN3", "Maserati"),
    ("ZN4", "Maserati"),
    ("ZN5", "Maserati"),
    ("ZN6", "Maserati"),
    ("ZN7", "Maserati"),
    ("ZN8", "Maserati"),
    ("ZN9", "Maserati"),
    ("ZNA", "Maserati"),
    ("ZNB", "Maserati"),
    ("ZNC", "Maserati"),
    ("ZND", "Maserati"),
    ("ZNE", "Maserati"),
    ("ZNF", "Maserati"),
    ("ZNG", "Maserati"),
    ("ZNH", "Maserati"),
    ("ZNJ", "Maserati"),
    ("ZNK", "Maserati"),
    ("ZNL", "Maserati"),
    ("ZNM", "Maserati"),
    ("ZNN", "Maserati"),
    ("ZNP", "Maserati"),
    ("ZNR", "Maserati"),
    ("ZNS", "Maserati"),
    ("ZNT", "Maserati"),
    ("ZNU", "Maserati"),
    ("ZNV", "Maserati"),
    ("ZNW", "Maserati"),
    ("ZNX", "Maserati"),
    ("ZNY", "Maserati"),
    ("ZNZ", "Maserati"),
];
